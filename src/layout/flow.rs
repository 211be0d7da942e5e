//! Vertical page flow and break decisions.
//!
//! Walks the document's blocks in order, breaks each one into lines, and
//! assigns every line a page index and vertical offset. The cursor state
//! is local to one pagination call and discarded with it.

use log::debug;

use crate::error::Result;
use crate::layout::align::right_aligned_x;
use crate::layout::breaker::{break_lines_measured, MeasuredLine};
use crate::measure::TextMeasurer;
use crate::model::{Document, LaidOutLine, LayoutWarning, PageGeometry, Style, StyleKind};

/// Position of the next line: page index and top-of-line offset.
#[derive(Debug, Clone, Copy)]
struct FlowCursor {
    current_page: usize,
    cursor_y: f32,
}

/// Everything the flow pass produces before footers are known.
#[derive(Debug)]
pub(crate) struct FlowOutput {
    pub lines: Vec<LaidOutLine>,
    pub page_count: usize,
    pub warnings: Vec<LayoutWarning>,
}

/// Single-use state machine over the document's blocks.
pub(crate) struct PageFlow<'a, M: TextMeasurer + ?Sized> {
    geometry: &'a PageGeometry,
    measurer: &'a M,
    cursor: FlowCursor,
    lines: Vec<LaidOutLine>,
    warnings: Vec<LayoutWarning>,
    page_has_lines: bool,
}

impl<'a, M: TextMeasurer + ?Sized> PageFlow<'a, M> {
    /// Create a flow over validated geometry.
    pub fn new(geometry: &'a PageGeometry, measurer: &'a M) -> Self {
        Self {
            geometry,
            measurer,
            cursor: FlowCursor {
                current_page: 0,
                cursor_y: geometry.margin_top,
            },
            lines: Vec::new(),
            warnings: Vec::new(),
            page_has_lines: false,
        }
    }

    /// Lay out the whole document and return the placed lines.
    pub fn run(mut self, document: &Document) -> Result<FlowOutput> {
        if !document.title.trim().is_empty() {
            self.place_block(&document.title, StyleKind::Title)?;
            self.cursor.cursor_y += self.geometry.title_spacing_after;
        }

        for section in &document.sections {
            // Skipped for the very first block to avoid leading whitespace.
            if !self.lines.is_empty() {
                self.cursor.cursor_y += self.geometry.heading_spacing_before;
            }
            self.place_block(&section.heading, StyleKind::Heading)?;
            self.cursor.cursor_y += self.geometry.heading_spacing_after;

            for paragraph in section.paragraphs() {
                self.place_block(paragraph, StyleKind::Body)?;
                // Gap after the last line of the paragraph, never before.
                self.cursor.cursor_y += self.geometry.paragraph_spacing;
            }
        }

        debug!(
            "flow complete: {} lines over {} pages, {} warnings",
            self.lines.len(),
            self.cursor.current_page + 1,
            self.warnings.len()
        );

        Ok(FlowOutput {
            lines: self.lines,
            page_count: self.cursor.current_page + 1,
            warnings: self.warnings,
        })
    }

    /// Break one block and place its lines.
    fn place_block(&mut self, text: &str, kind: StyleKind) -> Result<()> {
        let style = self.geometry.style(kind);
        let broken =
            break_lines_measured(text, self.geometry.printable_width(), style, self.measurer)?;
        for line in broken {
            self.place_line(line, style);
        }
        Ok(())
    }

    /// Place one line, breaking the page first if it does not fit.
    ///
    /// The full line is evaluated before any of its geometry is committed,
    /// so a line is never divided between two pages.
    fn place_line(&mut self, line: MeasuredLine, style: Style) {
        let geometry = self.geometry;
        let bottom_limit = geometry.page_height - geometry.margin_bottom;

        if self.cursor.cursor_y + geometry.line_height > bottom_limit {
            if geometry.line_height > geometry.printable_height() {
                // Taller than an empty page. Give it a page of its own and
                // keep going rather than spinning on empty pages.
                if self.page_has_lines {
                    self.break_page();
                }
                debug!(
                    "line taller than printable height on page {}: {:?}",
                    self.cursor.current_page, line.text
                );
                self.warnings.push(LayoutWarning::OversizedLine {
                    page: self.cursor.current_page,
                    text: line.text.clone(),
                });
            } else {
                self.break_page();
            }
        }

        if line.overflow {
            self.warnings.push(LayoutWarning::OversizedToken {
                text: line.text.clone(),
                width: line.width,
                max_width: geometry.printable_width(),
            });
        }

        self.lines.push(LaidOutLine {
            x: right_aligned_x(geometry, line.width),
            y: self.cursor.cursor_y,
            page: self.cursor.current_page,
            width: line.width,
            overflow: line.overflow,
            text: line.text,
            style,
        });
        self.cursor.cursor_y += geometry.line_height;
        self.page_has_lines = true;
    }

    fn break_page(&mut self) {
        self.cursor.current_page += 1;
        self.cursor.cursor_y = self.geometry.margin_top;
        self.page_has_lines = false;
        debug!("page break: starting page {}", self.cursor.current_page);
    }
}
