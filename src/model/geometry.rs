//! Page geometry and text styles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed page dimensions and spacing rules for one pagination run.
///
/// All lengths share a single unit; the A4 defaults are in millimeters.
/// Invariant: the margins must leave a positive printable area, checked by
/// [`PageGeometry::validate`] before any layout begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Full page width.
    pub page_width: f32,

    /// Full page height.
    pub page_height: f32,

    /// Left margin.
    pub margin_left: f32,

    /// Right margin. Lines are anchored against this edge.
    pub margin_right: f32,

    /// Top margin; the cursor starts here on every page.
    pub margin_top: f32,

    /// Bottom margin; no line may start below `page_height - margin_bottom`.
    pub margin_bottom: f32,

    /// Vertical advance per placed line, for every style.
    pub line_height: f32,

    /// Font size for the document title.
    pub title_font_size: f32,

    /// Font size for section headings.
    pub heading_font_size: f32,

    /// Font size for paragraph text.
    pub body_font_size: f32,

    /// Extra space above a section heading. Skipped for the very first
    /// block of the very first page.
    pub heading_spacing_before: f32,

    /// Extra space below a section heading.
    pub heading_spacing_after: f32,

    /// Space between the document title and the first section.
    pub title_spacing_after: f32,

    /// Gap after the last line of each paragraph, never before.
    pub paragraph_spacing: f32,
}

impl PageGeometry {
    /// A4 portrait in millimeters with the default story layout.
    pub fn a4() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 20.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
            line_height: 7.0,
            title_font_size: 20.0,
            heading_font_size: 14.0,
            body_font_size: 12.0,
            heading_spacing_before: 10.0,
            heading_spacing_after: 5.0,
            title_spacing_after: 10.0,
            paragraph_spacing: 7.0,
        }
    }

    /// Width available to text between the horizontal margins.
    pub fn printable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Height available to text between the vertical margins.
    pub fn printable_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }

    /// Resolve the configured style for a block kind.
    pub fn style(&self, kind: StyleKind) -> Style {
        let font_size = match kind {
            StyleKind::Title => self.title_font_size,
            StyleKind::Heading => self.heading_font_size,
            StyleKind::Body => self.body_font_size,
        };
        Style { kind, font_size }
    }

    /// Check that the margins leave a positive printable area.
    ///
    /// Fails before any layout begins; nothing is partially laid out.
    pub fn validate(&self) -> Result<()> {
        let width = self.printable_width();
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "printable width is {} (page width {} minus margins {} and {})",
                width, self.page_width, self.margin_left, self.margin_right
            )));
        }
        let height = self.printable_height();
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "printable height is {} (page height {} minus margins {} and {})",
                height, self.page_height, self.margin_top, self.margin_bottom
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Which kind of block a style belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// The document title.
    Title,
    /// A section heading.
    Heading,
    /// Paragraph text.
    Body,
}

/// A resolved text style, the unit the measurer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Block kind this style renders.
    pub kind: StyleKind,

    /// Font size in points.
    pub font_size: f32,
}

impl Style {
    /// Create a style.
    pub fn new(kind: StyleKind, font_size: f32) -> Self {
        Self { kind, font_size }
    }
}
