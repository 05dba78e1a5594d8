//! Project document writer
//!
//! Emits one `<paths>` element per entry, in document order. Which fields are
//! written depends on each entry's persist flags and, for some fields, on the
//! value being non-empty:
//!
//! - paths and `prediffer` are written when non-empty
//! - `filter` and `unpacker` need their persist flag and a non-empty value
//! - `left-readonly` and `right-readonly` are always written, while
//!   `middle-readonly` follows the middle path
//! - `subfolders` is written as `1` for any set nonzero value; the unset
//!   sentinel `-1` is written as `0`
//! - the remaining options follow their persist flag
//! - `hidden-list` needs its persist flag and at least one item

use std::io::Write;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::document::ProjectDocument;
use super::elements;
use super::entry::{ProjectEntry, Side, SUBFOLDERS_UNSET};
use super::error::ProjectError;

/// Configuration for the project writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Indentation character used for pretty printing
    pub indent_char: u8,

    /// Indentation width per nesting level (0 disables pretty printing)
    pub indent_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 2,
        }
    }
}

/// Serializer for project documents
#[derive(Debug, Clone, Default)]
pub struct ProjectWriter {
    config: WriterConfig,
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl ProjectWriter {
    /// Create a writer with the given configuration
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Serialize `document` into `sink`
    pub fn write<W: Write>(&self, document: &ProjectDocument, sink: W) -> Result<(), ProjectError> {
        let mut writer = if self.config.indent_size > 0 {
            Writer::new_with_indent(sink, self.config.indent_char, self.config.indent_size)
        } else {
            Writer::new(sink)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(elements::PROJECT)))?;
        for entry in document {
            write_entry(&mut writer, entry)?;
        }
        writer.write_event(Event::End(BytesEnd::new(elements::PROJECT)))?;

        let sink = writer.get_mut();
        sink.write_all(b"\n")?;
        sink.flush()?;

        debug!("Wrote project document with {} entries", document.len());
        Ok(())
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &ProjectEntry) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(elements::PATHS)))?;

    for (side, name) in [
        (Side::Left, elements::LEFT),
        (Side::Middle, elements::MIDDLE),
        (Side::Right, elements::RIGHT),
    ] {
        let (path, _) = entry.path(side);
        if !path.is_empty() {
            write_element(writer, name, path)?;
        }
    }

    if entry.filter.persist() && !entry.filter.get().is_empty() {
        write_element(writer, elements::FILTER, entry.filter.get())?;
    }
    if entry.subfolders.persist() {
        let recurse = !matches!(*entry.subfolders.get(), 0 | SUBFOLDERS_UNSET);
        write_element(writer, elements::SUBFOLDERS, flag(recurse))?;
    }

    write_element(writer, elements::LEFT_READONLY, flag(entry.is_read_only(Side::Left)))?;
    if !entry.middle().is_empty() {
        write_element(
            writer,
            elements::MIDDLE_READONLY,
            flag(entry.is_read_only(Side::Middle)),
        )?;
    }
    write_element(writer, elements::RIGHT_READONLY, flag(entry.is_read_only(Side::Right)))?;

    if entry.unpacker.persist() && !entry.unpacker.get().is_empty() {
        write_element(writer, elements::UNPACKER, entry.unpacker.get())?;
    }
    if !entry.prediffer().is_empty() {
        write_element(writer, elements::PREDIFFER, entry.prediffer())?;
    }

    if entry.ignore_white.persist() {
        write_element(writer, elements::WHITE_SPACES, &entry.ignore_white.get().to_string())?;
    }
    for (setting, name) in [
        (&entry.ignore_blank_lines, elements::IGNORE_BLANK_LINES),
        (&entry.ignore_case, elements::IGNORE_CASE),
        (&entry.ignore_eol, elements::IGNORE_CR_DIFF),
        (&entry.ignore_numbers, elements::IGNORE_NUMBERS),
        (&entry.ignore_codepage, elements::IGNORE_CODEPAGE_DIFF),
        (&entry.filter_comment_lines, elements::IGNORE_COMMENT_DIFF),
    ] {
        if setting.persist() {
            write_element(writer, name, flag(*setting.get()))?;
        }
    }
    if entry.compare_method.persist() {
        write_element(
            writer,
            elements::COMPARE_METHOD,
            &entry.compare_method.get().to_string(),
        )?;
    }

    let hidden = entry.hidden_items.get();
    if entry.hidden_items.persist() && !hidden.is_empty() {
        writer.write_event(Event::Start(BytesStart::new(elements::HIDDEN_LIST)))?;
        for item in hidden {
            write_element(writer, elements::HIDDEN_ITEM, item)?;
        }
        writer.write_event(Event::End(BytesEnd::new(elements::HIDDEN_LIST)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(elements::PATHS)))?;
    Ok(())
}
