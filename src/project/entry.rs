//! Project entry model: one comparison unit of a project document

use serde::{Deserialize, Serialize};

use super::setting::Setting;

/// Sentinel stored in `subfolders` until a value is read or set
pub const SUBFOLDERS_UNSET: i32 = -1;

/// One of the three compared locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left-hand location
    Left,
    /// Optional middle location (three-way comparison)
    Middle,
    /// Right-hand location
    Right,
}

impl Side {
    /// All sides in document order
    pub const ALL: [Side; 3] = [Side::Left, Side::Middle, Side::Right];

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Middle => 1,
            Side::Right => 2,
        }
    }
}

/// The (left, middle, right) locations handed to the comparison engine.
///
/// An empty string means the location is absent; an absent middle path makes
/// the comparison two-way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTriple {
    paths: [String; 3],
}

impl PathTriple {
    /// Build a two-way triple
    pub fn two_way(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            paths: [left.into(), String::new(), right.into()],
        }
    }

    /// Build a three-way triple
    pub fn three_way(
        left: impl Into<String>,
        middle: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            paths: [left.into(), middle.into(), right.into()],
        }
    }

    /// Path on the given side (empty when absent)
    pub fn get(&self, side: Side) -> &str {
        &self.paths[side.index()]
    }

    /// Replace the path on the given side
    pub fn set(&mut self, side: Side, path: impl Into<String>) {
        self.paths[side.index()] = path.into();
    }

    /// Left path
    pub fn left(&self) -> &str {
        self.get(Side::Left)
    }

    /// Middle path
    pub fn middle(&self) -> &str {
        self.get(Side::Middle)
    }

    /// Right path
    pub fn right(&self) -> &str {
        self.get(Side::Right)
    }

    /// Whether a middle path is set
    pub fn is_three_way(&self) -> bool {
        !self.middle().is_empty()
    }

    /// Number of non-empty paths
    pub fn count(&self) -> usize {
        self.paths.iter().filter(|p| !p.is_empty()).count()
    }

    fn append(&mut self, side: Side, text: &str) {
        self.paths[side.index()].push_str(text);
    }
}

/// One comparison unit of a project document.
///
/// Path fields and read-only flags are plain values. Every other field is a
/// [`Setting`], which records whether the field was present in the parsed
/// document and whether it should be written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    paths: PathTriple,
    path_present: [bool; 3],
    read_only: [bool; 3],

    /// File filter expression
    pub filter: Setting<String>,

    /// Recurse into subfolders (`-1` unset, `0` no, nonzero yes)
    pub subfolders: Setting<i32>,

    /// Unpacker plugin identifier
    pub unpacker: Setting<String>,

    prediffer: String,
    prediffer_present: bool,

    /// Whitespace handling code
    pub ignore_white: Setting<i32>,

    /// Ignore blank lines
    pub ignore_blank_lines: Setting<bool>,

    /// Ignore case
    pub ignore_case: Setting<bool>,

    /// Ignore carriage return differences
    pub ignore_eol: Setting<bool>,

    /// Ignore numbers
    pub ignore_numbers: Setting<bool>,

    /// Ignore codepage differences
    pub ignore_codepage: Setting<bool>,

    /// Ignore differences in comment lines
    pub filter_comment_lines: Setting<bool>,

    /// Compare method code
    pub compare_method: Setting<i32>,

    /// Previously hidden item identifiers, in document order
    pub hidden_items: Setting<Vec<String>>,
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self {
            paths: PathTriple::default(),
            path_present: [false; 3],
            read_only: [false; 3],
            filter: Setting::default(),
            subfolders: Setting::new(SUBFOLDERS_UNSET),
            unpacker: Setting::default(),
            prediffer: String::new(),
            prediffer_present: false,
            ignore_white: Setting::default(),
            ignore_blank_lines: Setting::default(),
            ignore_case: Setting::default(),
            ignore_eol: Setting::default(),
            ignore_numbers: Setting::default(),
            ignore_codepage: Setting::default(),
            filter_comment_lines: Setting::default(),
            compare_method: Setting::default(),
            hidden_items: Setting::default(),
        }
    }
}

impl ProjectEntry {
    /// Create an empty entry with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry for the given paths
    pub fn with_paths(paths: PathTriple) -> Self {
        let mut entry = Self::default();
        for side in Side::ALL {
            if !paths.get(side).is_empty() {
                entry.set_path(side, paths.get(side), None);
            }
        }
        entry
    }

    /// Path and read-only flag for a side
    pub fn path(&self, side: Side) -> (&str, bool) {
        (self.paths.get(side), self.read_only[side.index()])
    }

    /// Store a path verbatim. The read-only flag is only replaced when given.
    pub fn set_path(&mut self, side: Side, path: impl Into<String>, read_only: Option<bool>) {
        self.paths.set(side, path);
        self.path_present[side.index()] = true;
        if let Some(read_only) = read_only {
            self.read_only[side.index()] = read_only;
        }
    }

    /// Whether the path element for a side was present in the parsed document
    pub fn has_path(&self, side: Side) -> bool {
        self.path_present[side.index()]
    }

    /// Read-only flag for a side
    pub fn is_read_only(&self, side: Side) -> bool {
        self.read_only[side.index()]
    }

    /// Replace the read-only flag for a side
    pub fn set_read_only(&mut self, side: Side, read_only: bool) {
        self.read_only[side.index()] = read_only;
    }

    /// Left path
    pub fn left(&self) -> &str {
        self.paths.left()
    }

    /// Middle path
    pub fn middle(&self) -> &str {
        self.paths.middle()
    }

    /// Right path
    pub fn right(&self) -> &str {
        self.paths.right()
    }

    /// Store the left path, optionally replacing its read-only flag
    pub fn set_left(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.set_path(Side::Left, path, read_only);
    }

    /// Store the middle path, optionally replacing its read-only flag
    pub fn set_middle(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.set_path(Side::Middle, path, read_only);
    }

    /// Store the right path, optionally replacing its read-only flag
    pub fn set_right(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.set_path(Side::Right, path, read_only);
    }

    /// The stored path triple
    pub fn paths(&self) -> &PathTriple {
        &self.paths
    }

    /// Project the entry into the form used by the comparison engine.
    ///
    /// `recurse` is left untouched unless `subfolders` was explicitly set, in
    /// which case it becomes `subfolders == 1`. Callers seed it with their own
    /// default first.
    pub fn paths_and_recurse(&self, recurse: &mut bool) -> PathTriple {
        if let Some(&subfolders) = self.subfolders.explicit() {
            *recurse = subfolders == 1;
        }
        self.paths.clone()
    }

    /// Prediffer plugin identifier
    pub fn prediffer(&self) -> &str {
        &self.prediffer
    }

    /// Store the prediffer plugin identifier
    pub fn set_prediffer(&mut self, prediffer: impl Into<String>) {
        self.prediffer = prediffer.into();
        self.prediffer_present = true;
    }

    /// Whether the prediffer element was present in the parsed document
    pub fn has_prediffer(&self) -> bool {
        self.prediffer_present
    }

    /// Whether the entry describes a three-way comparison
    pub fn is_three_way(&self) -> bool {
        self.paths.is_three_way()
    }

    pub(crate) fn append_path(&mut self, side: Side, text: &str) {
        self.paths.append(side, text);
        self.path_present[side.index()] = true;
    }

    pub(crate) fn append_prediffer(&mut self, text: &str) {
        self.prediffer.push_str(text);
        self.prediffer_present = true;
    }
}
