//! Laid-out output types.

use serde::{Deserialize, Serialize};

use super::Style;

/// A single line with its final page and position.
///
/// Immutable once created. `x` is resolved from the same `width` captured
/// while the line was broken; the text is never re-measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaidOutLine {
    /// The exact text of this line.
    pub text: String,

    /// Style the line was measured and placed at.
    pub style: Style,

    /// Zero-based page index.
    pub page: usize,

    /// Left edge of the line; right-aligned within the printable area.
    pub x: f32,

    /// Top-of-line offset from the page top.
    pub y: f32,

    /// Measured width of this exact text at `style`.
    pub width: f32,

    /// Set when the line is a single token wider than the printable area,
    /// placed unbroken rather than clipped.
    pub overflow: bool,
}

/// One output page with its placed lines and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,

    /// Lines in placement order.
    pub lines: Vec<LaidOutLine>,

    /// Footer text, assigned once the total page count is known.
    pub footer_text: String,
}

impl Page {
    /// Create a new empty page.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            lines: Vec::new(),
            footer_text: String::new(),
        }
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Content-shape anomalies recorded during a successful layout run.
///
/// These are warnings, not errors: the offending line is placed anyway and
/// the host decides how to surface the condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// A single token wider than the printable width, placed unbroken.
    OversizedToken {
        /// The token text.
        text: String,
        /// Measured width of the token.
        width: f32,
        /// The printable width it exceeded.
        max_width: f32,
    },

    /// A line taller than the printable height, placed on its own page.
    OversizedLine {
        /// Page the line was placed on.
        page: usize,
        /// The line text.
        text: String,
    },
}

/// The terminal artifact of one pagination run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Pages in order; every index in `[0, total_pages)` is present.
    pub pages: Vec<Page>,

    /// Total number of pages produced.
    pub total_pages: usize,

    /// Anomalies recorded while laying out, in placement order.
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    /// Get a page by zero-based index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Iterate over all placed lines in page order.
    pub fn lines(&self) -> impl Iterator<Item = &LaidOutLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }

    /// Total number of placed lines.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Check if any width or height constraint could not be satisfied.
    pub fn has_overflow(&self) -> bool {
        !self.warnings.is_empty()
    }
}
