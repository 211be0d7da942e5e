//! Story-markup parsing.
//!
//! Narrative collaborators emit chapter titles wrapped in `**…**` markers
//! inside otherwise plain text. This module turns that format into a
//! [`Document`]: a paragraph containing a marker starts a new section, and
//! everything up to the next marker becomes that section's body.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{split_paragraphs, Document, Section};

fn marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"\*\*").unwrap())
}

/// Build a document from marker-delimited story text.
///
/// Text before the first marker becomes a section with an empty heading,
/// so nothing a collaborator produced is dropped. Markers are stripped
/// from headings and the heading is trimmed.
pub fn from_story_text(title: impl Into<String>, text: &str) -> Document {
    let mut document = Document::new(title);
    let mut heading = String::new();
    let mut body: Vec<&str> = Vec::new();

    for paragraph in split_paragraphs(text) {
        if paragraph.contains("**") {
            flush(&mut document, &mut heading, &mut body);
            heading = marker().replace_all(paragraph, "").trim().to_string();
        } else {
            body.push(paragraph);
        }
    }
    flush(&mut document, &mut heading, &mut body);

    document
}

fn flush(document: &mut Document, heading: &mut String, body: &mut Vec<&str>) {
    if heading.is_empty() && body.is_empty() {
        return;
    }
    document.add_section(Section::new(
        std::mem::take(heading),
        body.join("\n\n"),
    ));
    body.clear();
}
