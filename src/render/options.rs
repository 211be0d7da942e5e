//! Options for the plain-text page preview.

/// Options controlling [`to_text`](super::to_text) output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix each line with its `(page, x, y)` placement.
    pub include_coordinates: bool,

    /// Print the footer under each page.
    pub include_footers: bool,

    /// Separator printed between pages.
    pub page_separator: String,
}

impl RenderOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable coordinate prefixes.
    pub fn with_coordinates(mut self, include: bool) -> Self {
        self.include_coordinates = include;
        self
    }

    /// Enable or disable footers.
    pub fn with_footers(mut self, include: bool) -> Self {
        self.include_footers = include;
        self
    }

    /// Set the separator printed between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_coordinates: false,
            include_footers: true,
            page_separator: "----------------------------------------".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_coordinates(true)
            .with_footers(false)
            .with_page_separator("===");

        assert!(options.include_coordinates);
        assert!(!options.include_footers);
        assert_eq!(options.page_separator, "===");
    }
}
