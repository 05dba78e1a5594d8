//! Element names of the project document.
//!
//! These names are the wire contract shared with existing project files and
//! must not change.

/// Document root
pub const PROJECT: &str = "project";
/// One comparison entry
pub const PATHS: &str = "paths";
/// Left path
pub const LEFT: &str = "left";
/// Middle path
pub const MIDDLE: &str = "middle";
/// Right path
pub const RIGHT: &str = "right";
/// File filter expression
pub const FILTER: &str = "filter";
/// Recurse into subfolders
pub const SUBFOLDERS: &str = "subfolders";
/// Left read-only flag
pub const LEFT_READONLY: &str = "left-readonly";
/// Middle read-only flag
pub const MIDDLE_READONLY: &str = "middle-readonly";
/// Right read-only flag
pub const RIGHT_READONLY: &str = "right-readonly";
/// Unpacker plugin
pub const UNPACKER: &str = "unpacker";
/// Prediffer plugin
pub const PREDIFFER: &str = "prediffer";
/// Whitespace handling code
pub const WHITE_SPACES: &str = "white-spaces";
/// Ignore blank lines
pub const IGNORE_BLANK_LINES: &str = "ignore-blank-lines";
/// Ignore case
pub const IGNORE_CASE: &str = "ignore-case";
/// Ignore carriage return differences
pub const IGNORE_CR_DIFF: &str = "ignore-carriage-return-diff";
/// Ignore numbers
pub const IGNORE_NUMBERS: &str = "ignore-numbers";
/// Ignore codepage differences
pub const IGNORE_CODEPAGE_DIFF: &str = "ignore-codepage-diff";
/// Ignore comment line differences
pub const IGNORE_COMMENT_DIFF: &str = "ignore-comment-diff";
/// Compare method code
pub const COMPARE_METHOD: &str = "compare-method";
/// Wrapper for hidden items
pub const HIDDEN_LIST: &str = "hidden-list";
/// One hidden item
pub const HIDDEN_ITEM: &str = "hidden-item";
