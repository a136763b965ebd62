//! Line-oriented parser for CFG text
//!
//! Produces a [`RawDocument`] without interpreting any value. Each line is
//! classified on its own; unrecognised lines never reach the document and
//! parsing never fails.

use crate::types::raw::{RawDocument, RawParameter, RawSection};


/// Parse CFG content into sections, parameters and their comment blocks
pub fn parse(text: &str) -> RawDocument {
    text.split('\n')
        .filter_map(classify)
        .fold(CfgParser::default(), |mut parser, event| {
            parser.apply(event);
            parser
        })
        .finish()
}

/// Structural sanity check: every section and parameter carries a name
pub fn validate_structure(document: &RawDocument) -> bool {
    document.sections.iter().all(|section| {
        !section.name.is_empty() && section.parameters.iter().all(|p| !p.name.is_empty())
    })
}

/// Meaning of one recognised line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineEvent<'a> {
    Blank,
    Section(&'a str),
    Comment(&'a str),
    Assignment { name: &'a str, value: &'a str },
}

/// Classify a raw line, or `None` when it carries nothing the format knows
fn classify(line: &str) -> Option<LineEvent<'_>> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Some(LineEvent::Blank);
    }

    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return Some(LineEvent::Section(&trimmed[1..trimmed.len() - 1]));
    }

    if trimmed.starts_with('#') || trimmed.starts_with("//") {
        return Some(LineEvent::Comment(trimmed));
    }

    if let Some((name, value)) = trimmed.split_once('=') {
        return Some(LineEvent::Assignment {
            name: name.trim(),
            value: value.trim(),
        });
    }

    log::trace!("Ignoring unrecognised line: {trimmed}");
    None
}

#[derive(Default)]
struct CfgParser {
    document: RawDocument,
    pending_comments: Vec<String>,
    header_closed: bool,
}

impl CfgParser {
    fn apply(&mut self, event: LineEvent<'_>) {
        match event {
            LineEvent::Blank => self.pending_comments.clear(),
            LineEvent::Section(name) => {
                self.document.sections.push(RawSection::new(name));
                self.header_closed = true;
                self.pending_comments.clear();
            }
            LineEvent::Comment(text) => {
                if self.header_closed {
                    self.pending_comments.push(text.to_string());
                } else {
                    self.document.header_comments.push(text.to_string());
                }
            }
            LineEvent::Assignment { name, value } => {
                let Some(section) = self.document.sections.last_mut() else {
                    log::trace!("Dropping parameter '{name}' outside of any section");
                    return;
                };
                self.header_closed = true;
                if name.is_empty() {
                    return;
                }
                let comments = std::mem::take(&mut self.pending_comments);
                section
                    .parameters
                    .push(RawParameter::new(name, value, comments));
            }
        }
    }

    fn finish(self) -> RawDocument {
        self.document
    }
}
