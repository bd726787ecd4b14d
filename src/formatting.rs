use crate::config::DisplayConfig;

/// Box-drawing characters for cards, tab bar and bars
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector2: String,
    pub connector3: String,
    pub bar_filled: String,
    pub bar_empty: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector2: "┴".to_string(),
            connector3: "┬".to_string(),
            bar_filled: "█".to_string(),
            bar_empty: "░".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector2: "-".to_string(),
            connector3: "-".to_string(),
            bar_filled: "#".to_string(),
            bar_empty: ".".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text length
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.len()))
}

/// Number of filled cells for a bar of `width` cells at `percent` (0-100)
pub fn bar_fill(width: usize, percent: f64) -> usize {
    let filled = (width as f64 * percent / 100.0).round();
    (filled.max(0.0) as usize).min(width)
}

/// Format a horizontal bar of `width` cells filled to `percent`
pub fn format_bar(width: usize, percent: f64, display: &DisplayConfig) -> String {
    let filled = bar_fill(width, percent);
    format!(
        "{}{}",
        display.box_chars.bar_filled.repeat(filled),
        display.box_chars.bar_empty.repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_header_double_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Win Rates", true, &display);
        assert_eq!(result, "Win Rates\n═════════\n");
    }

    #[test]
    fn test_format_header_single_line_ascii() {
        let result = format_header("Win Rates", false, &ascii_display());
        assert_eq!(result, "Win Rates\n---------\n");
    }

    #[test]
    fn test_bar_fill_rounds() {
        assert_eq!(bar_fill(20, 57.2), 11);
        assert_eq!(bar_fill(20, 59.8), 12);
        assert_eq!(bar_fill(20, 51.4), 10);
        assert_eq!(bar_fill(20, 0.0), 0);
        assert_eq!(bar_fill(20, 100.0), 20);
    }

    #[test]
    fn test_bar_fill_never_exceeds_width() {
        assert_eq!(bar_fill(10, 250.0), 10);
        assert_eq!(bar_fill(10, -5.0), 0);
        assert_eq!(bar_fill(0, 50.0), 0);
    }

    #[test]
    fn test_format_bar_ascii() {
        assert_eq!(format_bar(10, 50.0, &ascii_display()), "#####.....");
    }

    #[test]
    fn test_format_bar_unicode() {
        let display = DisplayConfig::default();
        assert_eq!(format_bar(4, 75.0, &display), "███░");
    }
}
