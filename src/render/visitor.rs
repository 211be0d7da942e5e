//! Visitor seam for rendering backends.
//!
//! A rendering or encoding collaborator walks a [`LayoutResult`] and draws
//! each line at its resolved position. The engine itself never draws; it
//! only guarantees the walk order matches placement order.
//!
//! # Example
//!
//! ```
//! use typeflow::model::LaidOutLine;
//! use typeflow::render::visitor::PageVisitor;
//!
//! struct LineCounter(usize);
//!
//! impl PageVisitor for LineCounter {
//!     fn visit_line(&mut self, _line: &LaidOutLine) -> typeflow::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::{LaidOutLine, LayoutResult, Page};

/// Trait for walking laid-out pages in placement order.
///
/// Only `visit_line` is required; page boundaries and footers default to
/// no-ops.
pub trait PageVisitor {
    /// Called once per page, before its lines.
    fn visit_page(&mut self, page: &Page) -> Result<()> {
        let _ = page;
        Ok(())
    }

    /// Called for each placed line with its final coordinates.
    fn visit_line(&mut self, line: &LaidOutLine) -> Result<()>;

    /// Called once per page, after its lines, with the footer available
    /// on the page.
    fn visit_footer(&mut self, page: &Page) -> Result<()> {
        let _ = page;
        Ok(())
    }
}

/// Walk a layout result through a visitor in page order.
pub fn walk<V: PageVisitor + ?Sized>(layout: &LayoutResult, visitor: &mut V) -> Result<()> {
    for page in &layout.pages {
        visitor.visit_page(page)?;
        for line in &page.lines {
            visitor.visit_line(line)?;
        }
        visitor.visit_footer(page)?;
    }
    Ok(())
}
