//! Final page assembly and footer accounting.
//!
//! The total page count is only known once the flow pass has finished, so
//! footers are written here rather than during the streaming pass.

use chrono::Local;

use super::flow::FlowOutput;
use crate::model::{LayoutResult, Page};

/// The footer text carried by the original story output.
pub fn default_footer(page_number: usize, total_pages: usize, date: &str) -> String {
    format!(
        "صفحه {} از {} - تاریخ تولید: {}",
        page_number, total_pages, date
    )
}

/// Today's date in the format the default footer expects.
pub fn generation_date() -> String {
    Local::now().format("%Y/%m/%d").to_string()
}

/// Collect placed lines into pages and write each footer.
pub(crate) fn assemble(
    output: FlowOutput,
    date: &str,
    footer: &dyn Fn(usize, usize, &str) -> String,
) -> LayoutResult {
    let total_pages = output.page_count;
    let mut pages: Vec<Page> = (0..total_pages).map(Page::new).collect();

    for line in output.lines {
        pages[line.page].lines.push(line);
    }
    for page in &mut pages {
        page.footer_text = footer(page.index + 1, total_pages, date);
    }

    LayoutResult {
        pages,
        total_pages,
        warnings: output.warnings,
    }
}
