//! Greedy line breaking under a measured-width constraint.

use crate::error::Result;
use crate::measure::TextMeasurer;
use crate::model::Style;

/// A broken line with the width captured during measurement.
///
/// The flow engine consumes this form so a line's position can be resolved
/// from the exact width it was broken at, never from a re-measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    /// The line text.
    pub text: String,

    /// Measured width of the text at the breaking style.
    pub width: f32,

    /// Set when the line is a single token that exceeds the maximum width.
    pub overflow: bool,
}

/// Break `text` into lines no wider than `max_width`, keeping each line's
/// measured width.
///
/// Tokens are whitespace-separated and joined by single spaces. Tokens
/// accumulate onto the current line while the candidate still measures
/// within `max_width`; the first token that would not fit closes the line
/// and starts the next one. A token wider than `max_width` on its own is
/// emitted unbroken on its own line and flagged, never split or clipped.
/// Empty input yields no lines.
pub fn break_lines_measured<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f32,
    style: Style,
    measurer: &M,
) -> Result<Vec<MeasuredLine>> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for token in text.split_whitespace() {
        let candidate = if current.is_empty() {
            token.to_string()
        } else {
            format!("{} {}", current, token)
        };
        let candidate_width = measurer.measure(&candidate, style)?;

        if candidate_width <= max_width {
            current = candidate;
            current_width = candidate_width;
            continue;
        }

        if current.is_empty() {
            // The token alone does not fit; emit it as an overflow line.
            lines.push(MeasuredLine {
                text: candidate,
                width: candidate_width,
                overflow: true,
            });
            continue;
        }

        lines.push(MeasuredLine {
            text: std::mem::take(&mut current),
            width: current_width,
            overflow: false,
        });
        current_width = 0.0;

        let token_width = measurer.measure(token, style)?;
        if token_width > max_width {
            lines.push(MeasuredLine {
                text: token.to_string(),
                width: token_width,
                overflow: true,
            });
        } else {
            current = token.to_string();
            current_width = token_width;
        }
    }

    if !current.is_empty() {
        lines.push(MeasuredLine {
            text: current,
            width: current_width,
            overflow: false,
        });
    }

    Ok(lines)
}

/// Break `text` into plain line strings.
///
/// See [`break_lines_measured`] for the breaking rules.
pub fn break_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f32,
    style: Style,
    measurer: &M,
) -> Result<Vec<String>> {
    Ok(break_lines_measured(text, max_width, style, measurer)?
        .into_iter()
        .map(|line| line.text)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FnMeasurer;
    use crate::model::StyleKind;

    fn style() -> Style {
        Style::new(StyleKind::Body, 12.0)
    }

    /// One unit per character, spaces included.
    fn char_width() -> FnMeasurer<impl Fn(&str, Style) -> f32> {
        FnMeasurer(|text: &str, _| text.chars().count() as f32)
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        let lines = break_lines("", 10.0, style(), &char_width()).unwrap();
        assert!(lines.is_empty());

        let lines = break_lines("   \n\t  ", 10.0, style(), &char_width()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_single_line_when_everything_fits() {
        let lines = break_lines("یک دو سه", 20.0, style(), &char_width()).unwrap();
        assert_eq!(lines, vec!["یک دو سه".to_string()]);
    }

    #[test]
    fn test_breaks_when_next_token_would_overflow() {
        // "aaaa bbbb" is 9 units; limit 8 forces a break before "bbbb".
        let lines = break_lines("aaaa bbbb", 8.0, style(), &char_width()).unwrap();
        assert_eq!(lines, vec!["aaaa".to_string(), "bbbb".to_string()]);
    }

    #[test]
    fn test_exact_fit_is_kept_on_one_line() {
        let lines = break_lines("aaaa bbb", 8.0, style(), &char_width()).unwrap();
        assert_eq!(lines, vec!["aaaa bbb".to_string()]);
    }

    #[test]
    fn test_tokens_joined_by_single_space() {
        let lines = break_lines("یک   دو \n سه", 20.0, style(), &char_width()).unwrap();
        assert_eq!(lines, vec!["یک دو سه".to_string()]);
    }

    #[test]
    fn test_oversized_token_emitted_alone_and_flagged() {
        let lines =
            break_lines_measured("ab cdefghijkl mn", 6.0, style(), &char_width()).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "ab");
        assert!(!lines[0].overflow);
        assert_eq!(lines[1].text, "cdefghijkl");
        assert!(lines[1].overflow);
        assert!(lines[1].width > 6.0);
        assert_eq!(lines[2].text, "mn");
        assert!(!lines[2].overflow);
    }

    #[test]
    fn test_oversized_first_token() {
        let lines = break_lines_measured("cdefghijkl ab", 6.0, style(), &char_width()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].overflow);
        assert_eq!(lines[1].text, "ab");
    }

    #[test]
    fn test_widths_captured_during_breaking() {
        let lines = break_lines_measured("aaa bb c", 6.0, style(), &char_width()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "aaa bb");
        assert_eq!(lines[0].width, 6.0);
        assert_eq!(lines[1].text, "c");
        assert_eq!(lines[1].width, 1.0);
    }

    #[test]
    fn test_deterministic() {
        let first = break_lines_measured("یک دو سه چهار پنج شش", 7.0, style(), &char_width())
            .unwrap();
        let second = break_lines_measured("یک دو سه چهار پنج شش", 7.0, style(), &char_width())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_measurement_failure_propagates() {
        let failing = FnMeasurer(|_: &str, _| f32::NAN);
        assert!(break_lines("متن", 10.0, style(), &failing).is_err());
    }
}
