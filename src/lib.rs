//! # mergeproject - Comparison Project Documents
//!
//! `mergeproject` reads and writes the XML project documents used to save a
//! file or folder comparison: which locations are compared, and with which
//! options.
//!
//! ## Key Features
//!
//! - **Streaming Reader**: Event-driven parsing with quick-xml; the whole
//!   document is materialized as a [`project::ProjectDocument`].
//!
//! - **Presence Tracking**: Every option records whether it appeared in the
//!   document, separately from its value.
//!
//! - **Selective Persistence**: Per-field persist flags decide what the writer
//!   emits, so callers can hold values in memory without saving them.
//!
//! - **Lenient Parsing**: Unknown elements and malformed numbers never fail a
//!   read. Only broken XML does.
//!
//! ## Quick Start
//!
//! ```rust
//! use mergeproject::project::{PathTriple, ProjectDocument, ProjectEntry};
//!
//! let mut entry = ProjectEntry::with_paths(PathTriple::two_way("/src/a", "/src/b"));
//! entry.filter.set("*.rs".to_string());
//! entry.subfolders.set(1);
//!
//! let document: ProjectDocument = vec![entry].into();
//! let xml = document.to_xml_string()?;
//!
//! let parsed = ProjectDocument::from_xml_str(&xml)?;
//! let mut recurse = false;
//! let paths = parsed.entries()[0].paths_and_recurse(&mut recurse);
//! assert_eq!(paths.left(), "/src/a");
//! assert!(recurse);
//! # Ok::<(), mergeproject::project::ProjectError>(())
//! ```
//!
//! ## Document Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <project>
//!   <paths>
//!     <left>C:\old</left>
//!     <right>C:\new</right>
//!     <filter>*.*</filter>
//!     <subfolders>1</subfolders>
//!     <left-readonly>0</left-readonly>
//!     <right-readonly>0</right-readonly>
//!   </paths>
//! </project>
//! ```

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod project;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::project::{
        is_project_file, PathTriple, ProjectDocument, ProjectEntry, ProjectError, ProjectReader,
        ProjectWriter, Setting, Side, WriterConfig, PROJECT_FILE_EXTENSION,
    };
}
