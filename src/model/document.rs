//! Document input types.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A structured document to paginate.
///
/// Documents are immutable inputs: built once per pagination request and
/// never modified by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title, laid out at the top of the first page.
    /// An empty title produces no title block.
    pub title: String,

    /// Sections in source order.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new document with the given title and no sections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Add a section, consuming and returning the document.
    pub fn with_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_section(Section::new(heading, body));
        self
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content: title, headings, and bodies in order.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.sections.len() * 2);
        if !self.title.trim().is_empty() {
            parts.push(self.title.as_str());
        }
        for section in &self.sections {
            if !section.heading.trim().is_empty() {
                parts.push(section.heading.as_str());
            }
            if !section.body.trim().is_empty() {
                parts.push(section.body.as_str());
            }
        }
        parts.join("\n\n")
    }
}

/// A titled section whose body holds blank-line separated paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading text.
    pub heading: String,

    /// Free-form body text; paragraphs are separated by one or more
    /// blank lines.
    pub body: String,
}

impl Section {
    /// Create a new section.
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Split the body into trimmed, non-empty paragraphs.
    pub fn paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.body).collect()
    }
}

/// Split text on the paragraph delimiter (consecutive blank lines),
/// dropping paragraphs that are empty after trimming.
pub(crate) fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    paragraph_delimiter()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

fn paragraph_delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r"\n[ \t\r]*\n").unwrap())
}
