/// Errors that can occur while reading or writing project documents
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The XML tokenizer rejected the document
    #[error("Malformed project document at byte {position}: {message}")]
    MalformedDocument {
        /// Byte offset where the problem was detected
        position: u64,
        /// Tokenizer or structure error description
        message: String,
    },

    /// I/O error on the document source or sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text could not be decoded with the document encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Replacing the target file with the freshly written document failed
    #[error("Failed to replace project file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl ProjectError {
    /// Classify a tokenizer error raised at `position`
    pub(crate) fn from_xml(err: quick_xml::Error, position: u64) -> Self {
        match err {
            quick_xml::Error::Io(io) => {
                ProjectError::Io(std::io::Error::new(io.kind(), io.to_string()))
            }
            other => ProjectError::MalformedDocument {
                position,
                message: other.to_string(),
            },
        }
    }

    /// Whether this error reports a syntactically broken document
    pub fn is_malformed(&self) -> bool {
        matches!(self, ProjectError::MalformedDocument { .. })
    }
}
