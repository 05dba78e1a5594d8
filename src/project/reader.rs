//! Streaming project document reader using quick-xml
//!
//! The reader pulls events from the tokenizer and feeds them to a small
//! handler that tracks the open-element stack. Field text is collected per
//! open element and dispatched through a fixed name → assignment table when
//! the element closes.

use std::io::BufRead;

use log::{debug, trace};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::document::ProjectDocument;
use super::elements;
use super::entry::{ProjectEntry, Side};
use super::error::ProjectError;

/// Field assignment for one leaf element
type Assign = fn(&mut ProjectEntry, &str);

/// Leaf element names and the field each one feeds
static LEAVES: &[(&str, Assign)] = &[
    (elements::LEFT, |entry, text| entry.append_path(Side::Left, text)),
    (elements::MIDDLE, |entry, text| entry.append_path(Side::Middle, text)),
    (elements::RIGHT, |entry, text| entry.append_path(Side::Right, text)),
    (elements::FILTER, |entry, text| entry.filter.append(text)),
    (elements::SUBFOLDERS, |entry, text| entry.subfolders.set(parse_int(text))),
    (elements::LEFT_READONLY, |entry, text| {
        entry.set_read_only(Side::Left, parse_bool(text))
    }),
    (elements::MIDDLE_READONLY, |entry, text| {
        entry.set_read_only(Side::Middle, parse_bool(text))
    }),
    (elements::RIGHT_READONLY, |entry, text| {
        entry.set_read_only(Side::Right, parse_bool(text))
    }),
    (elements::UNPACKER, |entry, text| entry.unpacker.append(text)),
    (elements::PREDIFFER, |entry, text| entry.append_prediffer(text)),
    (elements::WHITE_SPACES, |entry, text| entry.ignore_white.set(parse_int(text))),
    (elements::IGNORE_BLANK_LINES, |entry, text| {
        entry.ignore_blank_lines.set(parse_bool(text))
    }),
    (elements::IGNORE_CASE, |entry, text| entry.ignore_case.set(parse_bool(text))),
    (elements::IGNORE_CR_DIFF, |entry, text| entry.ignore_eol.set(parse_bool(text))),
    (elements::IGNORE_NUMBERS, |entry, text| {
        entry.ignore_numbers.set(parse_bool(text))
    }),
    (elements::IGNORE_CODEPAGE_DIFF, |entry, text| {
        entry.ignore_codepage.set(parse_bool(text))
    }),
    (elements::IGNORE_COMMENT_DIFF, |entry, text| {
        entry.filter_comment_lines.set(parse_bool(text))
    }),
    (elements::COMPARE_METHOD, |entry, text| {
        entry.compare_method.set(parse_int(text))
    }),
    (elements::HIDDEN_ITEM, |entry, text| {
        entry.hidden_items.get_mut().push(text.to_owned());
        entry.hidden_items.set_present(true);
    }),
];

/// Depth of a leaf element: root → paths → leaf
const LEAF_DEPTH: usize = 3;

fn find_leaf(name: &str) -> Option<Assign> {
    LEAVES
        .iter()
        .find(|(leaf, _)| *leaf == name)
        .map(|(_, assign)| *assign)
}

/// Parse a leading decimal integer the way C `atoi` does.
///
/// Leading whitespace is skipped, an optional sign is honoured and parsing
/// stops at the first non-digit. Text without digits yields 0. Values outside
/// the `i32` range saturate.
pub fn parse_int(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Nonzero integer (per [`parse_int`]) means true
pub fn parse_bool(text: &str) -> bool {
    parse_int(text) != 0
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    text: String,
}

/// Parse state driven by tokenizer events
#[derive(Debug, Default)]
pub(crate) struct HandlerState {
    document: ProjectDocument,
    stack: Vec<OpenElement>,
    current: Option<usize>,
}

impl HandlerState {
    pub(crate) fn start_element(&mut self, name: &str) {
        if name == elements::PATHS {
            self.document.push(ProjectEntry::new());
            self.current = Some(self.document.len() - 1);
            debug!("Started project entry {}", self.document.len());
        }
        self.stack.push(OpenElement {
            name: name.to_owned(),
            text: String::new(),
        });
    }

    pub(crate) fn characters(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(open) => open.text.push_str(text),
            None => trace!("Ignoring text outside the root element"),
        }
    }

    pub(crate) fn end_element(&mut self) {
        let depth = self.stack.len();
        let Some(open) = self.stack.pop() else {
            return;
        };

        let Some(index) = self.current else {
            return;
        };

        let assign = match find_leaf(&open.name) {
            Some(assign) if depth == LEAF_DEPTH || open.name == elements::HIDDEN_ITEM => assign,
            _ => {
                if !open.text.trim().is_empty() {
                    trace!("Ignoring text in <{}> at depth {}", open.name, depth);
                }
                return;
            }
        };

        if let Some(entry) = self.document.entries_mut().get_mut(index) {
            assign(entry, &open.text);
        }
    }

    pub(crate) fn open_element(&self) -> Option<&str> {
        self.stack.last().map(|open| open.name.as_str())
    }

    pub(crate) fn finish(self) -> ProjectDocument {
        self.document
    }
}

/// Streaming reader for project documents
pub struct ProjectReader<R: BufRead> {
    reader: Reader<R>,
}

impl<R: BufRead> ProjectReader<R> {
    /// Create a new reader from a BufRead source
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;

        Self { reader }
    }

    /// Consume the whole source and build the document
    pub fn read(mut self) -> Result<ProjectDocument, ProjectError> {
        let mut state = HandlerState::default();
        let mut buf = Vec::new();

        loop {
            let event = match self.reader.read_event_into(&mut buf) {
                Ok(event) => event,
                Err(e) => return Err(ProjectError::from_xml(e, self.reader.error_position())),
            };

            match event {
                Event::Start(ref e) => {
                    let local = e.local_name();
                    let name = self
                        .reader
                        .decoder()
                        .decode(local.as_ref())
                        .map_err(|e| ProjectError::Encoding(e.to_string()))?;
                    state.start_element(&name);
                }
                Event::End(_) => state.end_element(),
                Event::Text(ref t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| ProjectError::from_xml(e, self.reader.buffer_position()))?;
                    state.characters(&text);
                }
                Event::CData(ref c) => {
                    let text = self
                        .reader
                        .decoder()
                        .decode(c.as_ref())
                        .map_err(|e| ProjectError::Encoding(e.to_string()))?;
                    state.characters(&text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(name) = state.open_element() {
            return Err(ProjectError::MalformedDocument {
                position: self.reader.buffer_position(),
                message: format!("unclosed element <{}>", name),
            });
        }

        let document = state.finish();
        debug!("Read project document with {} entries", document.len());
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_like_atoi() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("  12abc"), 12);
        assert_eq!(parse_int("-7"), -7);
        assert_eq!(parse_int("+3"), 3);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("x1"), 0);
        assert_eq!(parse_int("-"), 0);
        assert_eq!(parse_int("99999999999"), i32::MAX);
        assert_eq!(parse_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1"));
        assert!(parse_bool("2"));
        assert!(parse_bool("-1"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("true"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_leaf_table_names_are_unique() {
        for (i, (name, _)) in LEAVES.iter().enumerate() {
            assert!(
                LEAVES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate leaf {}",
                name
            );
        }
        assert!(find_leaf(elements::PATHS).is_none());
        assert!(find_leaf(elements::HIDDEN_LIST).is_none());
    }

    #[test]
    fn test_handler_appends_entry_before_children() {
        let mut state = HandlerState::default();
        state.start_element("project");
        state.start_element("paths");
        assert_eq!(state.document.len(), 1);

        state.start_element("left");
        state.characters("C:\\");
        state.characters("dir");
        state.end_element();

        state.start_element("white-spaces");
        state.end_element();

        state.end_element();
        state.end_element();

        let document = state.finish();
        let entry = &document.entries()[0];
        assert_eq!(entry.left(), "C:\\dir");
        assert!(entry.ignore_white.is_present());
        assert_eq!(*entry.ignore_white.get(), 0);
    }

    #[test]
    fn test_handler_ignores_text_without_entry() {
        let mut state = HandlerState::default();
        state.start_element("project");
        state.start_element("other");
        state.start_element("left");
        state.characters("ignored");
        state.end_element();
        state.end_element();
        state.end_element();

        assert!(state.finish().is_empty());
    }
}
