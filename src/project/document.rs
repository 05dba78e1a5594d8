//! Project document: the ordered list of comparison entries, plus the file
//! level read/save entry points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::entry::ProjectEntry;
use super::error::ProjectError;
use super::reader::ProjectReader;
use super::writer::{ProjectWriter, WriterConfig};

/// File extension for project documents
pub const PROJECT_FILE_EXTENSION: &str = "WinMerge";

/// Whether `path` carries the project file extension (case-insensitive)
pub fn is_project_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_FILE_EXTENSION))
}

/// An ordered sequence of project entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    entries: Vec<ProjectEntry>,
}

impl ProjectDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in document order
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    /// Mutable access to the entries
    pub fn entries_mut(&mut self) -> &mut Vec<ProjectEntry> {
        &mut self.entries
    }

    /// Append an entry
    pub fn push(&mut self, entry: ProjectEntry) {
        self.entries.push(entry);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectEntry> {
        self.entries.iter()
    }

    /// Parse a document from a buffered source
    pub fn from_reader<R: std::io::BufRead>(source: R) -> Result<Self, ProjectError> {
        ProjectReader::new(source).read()
    }

    /// Parse a document held in memory
    pub fn from_xml_str(xml: &str) -> Result<Self, ProjectError> {
        Self::from_reader(xml.as_bytes())
    }

    /// Read a project file
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let document = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded project {} ({} entries)",
            path.display(),
            document.len()
        );
        Ok(document)
    }

    /// Serialize the document into `sink` with the default writer settings
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), ProjectError> {
        ProjectWriter::default().write(self, sink)
    }

    /// Serialize the document into a string
    pub fn to_xml_string(&self) -> Result<String, ProjectError> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        String::from_utf8(out).map_err(|e| ProjectError::Encoding(e.to_string()))
    }

    /// Save the document to `path` with the default writer settings
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        self.save_file_with(path, &WriterConfig::default())
    }

    /// Save the document to `path`.
    ///
    /// The document is written to a temporary file next to the target and
    /// then moved over it, so an existing project is never left truncated.
    pub fn save_file_with(
        &self,
        path: impl AsRef<Path>,
        config: &WriterConfig,
    ) -> Result<(), ProjectError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut out = BufWriter::new(temp.as_file_mut());
            ProjectWriter::new(config.clone()).write(self, &mut out)?;
            out.flush()?;
        }
        temp.persist(path)?;

        info!("Saved project {} ({} entries)", path.display(), self.len());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProjectDocument {
    type Item = &'a ProjectEntry;
    type IntoIter = std::slice::Iter<'a, ProjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<ProjectEntry> for ProjectDocument {
    fn from_iter<I: IntoIterator<Item = ProjectEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ProjectEntry>> for ProjectDocument {
    fn from(entries: Vec<ProjectEntry>) -> Self {
        Self { entries }
    }
}
