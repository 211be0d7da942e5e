//! # typeflow
//!
//! Deterministic line-breaking and pagination engine for right-to-left
//! documents.
//!
//! typeflow turns a structured document (a title plus an ordered list of
//! titled sections of paragraph text) into fixed-size pages: greedy line
//! breaking under a measured-width constraint, vertical flow with
//! page-break decisions, right-aligned coordinates, and per-page footer
//! accounting. It never draws anything itself; a rendering backend walks
//! the resulting [`LayoutResult`] and puts each line at its `(x, y)`.
//!
//! ## Quick Start
//!
//! ```
//! use typeflow::{paginate, CharCountMeasurer, Document, PageGeometry, Section};
//!
//! fn main() -> typeflow::Result<()> {
//!     let mut doc = Document::new("داستان خواب شما");
//!     doc.add_section(Section::new(
//!         "فصل یک",
//!         "پاراگراف اول.\n\nپاراگراف دوم.",
//!     ));
//!
//!     let layout = paginate(&doc, &PageGeometry::a4(), &CharCountMeasurer::new())?;
//!     println!("{} pages, {} lines", layout.total_pages, layout.line_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Backend-independent**: width comes from a host-supplied
//!   [`TextMeasurer`]; the engine assigns coordinates and nothing else
//! - **Right-to-left placement**: every line's right edge is anchored to
//!   the printable area's right margin
//! - **No silent clipping**: oversized tokens and lines are placed anyway
//!   and reported as [`LayoutWarning`]s on the result
//! - **Deterministic**: identical inputs produce byte-identical layouts

pub mod error;
pub mod layout;
pub mod measure;
pub mod model;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{break_lines, default_footer, generation_date, MeasuredLine};
pub use measure::{CharCountMeasurer, FnMeasurer, MeasureCache, TextMeasurer};
pub use model::{
    Document, LaidOutLine, LayoutResult, LayoutWarning, Page, PageGeometry, Section, Style,
    StyleKind,
};
pub use parse::from_story_text;
pub use render::{to_json, to_text, JsonFormat, PageVisitor, RenderOptions};

/// Paginate a document with the default footer and today's date.
///
/// # Example
///
/// ```
/// use typeflow::{paginate, CharCountMeasurer, Document, PageGeometry};
///
/// let doc = Document::new("عنوان").with_section("فصل", "متن.");
/// let layout = paginate(&doc, &PageGeometry::a4(), &CharCountMeasurer::new()).unwrap();
/// assert_eq!(layout.total_pages, 1);
/// ```
pub fn paginate<M: TextMeasurer>(
    document: &Document,
    geometry: &PageGeometry,
    measurer: &M,
) -> Result<LayoutResult> {
    Paginator::new(measurer)
        .with_geometry(geometry.clone())
        .paginate(document)
}

/// Builder for pagination runs.
///
/// # Example
///
/// ```
/// use typeflow::{CharCountMeasurer, Document, PageGeometry, Paginator};
///
/// let doc = Document::new("عنوان").with_section("فصل", "متن.");
/// let layout = Paginator::new(CharCountMeasurer::new())
///     .with_geometry(PageGeometry::a4())
///     .with_generation_date("1404/05/15")
///     .paginate(&doc)?;
///
/// assert!(layout.pages[0].footer_text.contains("1404/05/15"));
/// # Ok::<(), typeflow::Error>(())
/// ```
pub struct Paginator<M> {
    measurer: M,
    geometry: PageGeometry,
    generation_date: Option<String>,
    footer: Option<Box<dyn Fn(usize, usize, &str) -> String>>,
}

impl<M: TextMeasurer> Paginator<M> {
    /// Create a paginator over the given measurer with A4 geometry.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            geometry: PageGeometry::a4(),
            generation_date: None,
            footer: None,
        }
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Pin the footer's generation date instead of using today's.
    pub fn with_generation_date(mut self, date: impl Into<String>) -> Self {
        self.generation_date = Some(date.into());
        self
    }

    /// Replace the default footer formatter.
    ///
    /// The formatter receives the one-based page number, the total page
    /// count, and the generation date string.
    pub fn with_footer<F>(mut self, footer: F) -> Self
    where
        F: Fn(usize, usize, &str) -> String + 'static,
    {
        self.footer = Some(Box::new(footer));
        self
    }

    /// Run one pagination pass over the document.
    ///
    /// Validates geometry first; structural failures abort before any
    /// layout, while content-shape anomalies surface as warnings on the
    /// returned result.
    pub fn paginate(&self, document: &Document) -> Result<LayoutResult> {
        self.geometry.validate()?;

        // Candidate lines are measured repeatedly during accumulation;
        // memoize within this run.
        let cache = MeasureCache::new(&self.measurer);
        let output = layout::PageFlow::new(&self.geometry, &cache).run(document)?;

        let date = match &self.generation_date {
            Some(date) => date.clone(),
            None => generation_date(),
        };
        let result = match &self.footer {
            Some(footer) => layout::assemble(output, &date, footer.as_ref()),
            None => layout::assemble(output, &date, &default_footer),
        };
        Ok(result)
    }
}
