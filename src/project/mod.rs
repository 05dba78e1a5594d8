//! # Project Document Module
//!
//! Reading and writing of comparison project documents. A project document
//! lists one or more comparison entries, each naming the compared locations
//! and the comparison options to apply.
//!
//! ## Document Structure
//!
//! ```text
//! project
//! └── paths* (one per entry)
//!     ├── left / middle / right
//!     ├── filter, subfolders
//!     ├── left-readonly / middle-readonly / right-readonly
//!     ├── unpacker, prediffer
//!     ├── white-spaces, ignore-* flags, compare-method
//!     └── hidden-list
//!         └── hidden-item*
//! ```
//!
//! ## Leniency
//!
//! Unknown elements are skipped and numeric fields that fail to parse fall
//! back to 0, so hand-edited and newer documents still load. Only tokenizer
//! errors (broken XML) fail a read.

mod document;
pub mod elements;
mod entry;
mod error;
mod reader;
mod setting;
mod writer;


pub use document::{is_project_file, ProjectDocument, PROJECT_FILE_EXTENSION};
pub use entry::{PathTriple, ProjectEntry, Side, SUBFOLDERS_UNSET};
pub use error::ProjectError;
pub use reader::{parse_bool, parse_int, ProjectReader};
pub use setting::Setting;
pub use writer::{ProjectWriter, WriterConfig};
