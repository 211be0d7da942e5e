//! Plain-text preview of a layout result.

use crate::error::Result;
use crate::model::{LaidOutLine, LayoutResult, Page};

use super::visitor::{walk, PageVisitor};
use super::RenderOptions;

/// Render a layout result as a plain-text page preview.
///
/// Lines appear in placement order; pages are divided by the configured
/// separator. Mainly for debugging and tests; real backends implement
/// [`PageVisitor`] themselves.
pub fn to_text(layout: &LayoutResult, options: &RenderOptions) -> Result<String> {
    let mut preview = TextPreview {
        options,
        out: String::new(),
    };
    walk(layout, &mut preview)?;
    Ok(preview.out.trim_end().to_string())
}

struct TextPreview<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl PageVisitor for TextPreview<'_> {
    fn visit_page(&mut self, page: &Page) -> Result<()> {
        if page.index > 0 {
            self.out.push_str(&self.options.page_separator);
            self.out.push('\n');
        }
        Ok(())
    }

    fn visit_line(&mut self, line: &LaidOutLine) -> Result<()> {
        if self.options.include_coordinates {
            self.out.push_str(&format!(
                "[p{} x{:.1} y{:.1}] {}\n",
                line.page, line.x, line.y, line.text
            ));
        } else {
            self.out.push_str(&line.text);
            self.out.push('\n');
        }
        Ok(())
    }

    fn visit_footer(&mut self, page: &Page) -> Result<()> {
        if self.options.include_footers && !page.footer_text.is_empty() {
            self.out.push_str(&page.footer_text);
            self.out.push('\n');
        }
        Ok(())
    }
}
