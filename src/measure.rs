//! Text measurement boundary.
//!
//! The engine never rasterizes glyphs; it asks a host-supplied measurer
//! for the rendered width of a string at a given style. The measurer must
//! be synchronous and deterministic for fixed `(text, style)` within one
//! pagination run. Greedy line breaking measures each candidate line as
//! tokens accumulate, so hosts with expensive metrics should wrap their
//! measurer in [`MeasureCache`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Style, StyleKind};

/// A capability that reports the rendered width of text at a style.
pub trait TextMeasurer {
    /// Measure the rendered width of `text` at `style`, in page units.
    ///
    /// A failure here is fatal for the pagination run: a guessed width
    /// would corrupt every downstream line-fit decision.
    fn measure(&self, text: &str, style: Style) -> Result<f32>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: Style) -> Result<f32> {
        (**self).measure(text, style)
    }
}

/// Adapter turning a plain width function into a [`TextMeasurer`].
///
/// Non-finite or negative widths are rejected as measurement failures.
pub struct FnMeasurer<F>(pub F);

impl<F> TextMeasurer for FnMeasurer<F>
where
    F: Fn(&str, Style) -> f32,
{
    fn measure(&self, text: &str, style: Style) -> Result<f32> {
        let width = (self.0)(text, style);
        if !width.is_finite() || width < 0.0 {
            return Err(Error::Measurement {
                text: text.to_string(),
                reason: format!("measurer returned unusable width {}", width),
            });
        }
        Ok(width)
    }
}

/// Width heuristic for hosts without font metrics.
///
/// Approximates every character as a fixed fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct CharCountMeasurer {
    /// Average character width as a fraction of the font size.
    pub char_width_ratio: f32,
}

impl CharCountMeasurer {
    /// Create a measurer with the usual 0.6 character-width ratio.
    pub fn new() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }

    /// Create a measurer with a custom character-width ratio.
    pub fn with_ratio(char_width_ratio: f32) -> Self {
        Self { char_width_ratio }
    }
}

impl Default for CharCountMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CharCountMeasurer {
    fn measure(&self, text: &str, style: Style) -> Result<f32> {
        Ok(text.chars().count() as f32 * style.font_size * self.char_width_ratio)
    }
}

/// Style keyed by kind plus font size rounded to tenths of a point.
type CacheKey = (StyleKind, i32, String);

/// Memoizes `(text, style)` measurements within a single pagination run.
///
/// The cache lives exactly as long as one run; it is never shared across
/// runs, so a measurer only needs to be deterministic within one.
pub struct MeasureCache<'a, M: TextMeasurer + ?Sized> {
    inner: &'a M,
    cache: RefCell<HashMap<CacheKey, f32>>,
}

impl<'a, M: TextMeasurer + ?Sized> MeasureCache<'a, M> {
    /// Wrap a measurer in a fresh cache.
    pub fn new(inner: &'a M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct measurements stored so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Check if nothing has been measured yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for MeasureCache<'_, M> {
    fn measure(&self, text: &str, style: Style) -> Result<f32> {
        let key = (style.kind, (style.font_size * 10.0) as i32, text.to_string());
        if let Some(&width) = self.cache.borrow().get(&key) {
            return Ok(width);
        }
        let width = self.inner.measure(text, style)?;
        self.cache.borrow_mut().insert(key, width);
        Ok(width)
    }
}
