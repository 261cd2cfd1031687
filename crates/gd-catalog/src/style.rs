//! Size and color settings of the styled-snippet modal.

use crate::config::{DEFAULT_COLOR_HEX, DEFAULT_FONT_SIZE_PX, MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};
use crate::notice::Notice;
use crate::snippet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    font_size_px: u32,
    color_hex: String,
    color_user_set: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            color_hex: DEFAULT_COLOR_HEX.to_owned(),
            color_user_set: false,
        }
    }
}

/// An edit coming from one of the modal controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleCommand {
    SetSizeFromSlider(i64),
    SetSizeFromInput(String),
    SetColor(String),
    ResetSize,
    ResetColor,
}

impl StyleOptions {
    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    pub fn color_hex(&self) -> &str {
        &self.color_hex
    }

    pub fn color_user_set(&self) -> bool {
        self.color_user_set
    }

    /// Color that ends up in generated markup, if any.
    pub fn effective_color(&self) -> Option<&str> {
        self.color_user_set.then_some(self.color_hex.as_str())
    }

    pub fn set_font_size(&mut self, size: i64) {
        self.font_size_px = clamp_font_size(size);
    }

    pub fn apply(&mut self, command: StyleCommand) -> Option<Notice> {
        match command {
            StyleCommand::SetSizeFromSlider(size) => {
                self.set_font_size(size);
                None
            }
            StyleCommand::SetSizeFromInput(raw) => {
                if let Some(size) = parse_size_input(&raw) {
                    self.set_font_size(size);
                }
                None
            }
            StyleCommand::SetColor(color) => {
                self.color_hex = color;
                self.color_user_set = true;
                None
            }
            StyleCommand::ResetSize => {
                self.font_size_px = DEFAULT_FONT_SIZE_PX;
                Some(Notice::info(format!("Size reset to {DEFAULT_FONT_SIZE_PX}px")))
            }
            StyleCommand::ResetColor => {
                self.color_hex = DEFAULT_COLOR_HEX.to_owned();
                self.color_user_set = false;
                Some(Notice::info("Color reset to default"))
            }
        }
    }

    pub fn preview_style(&self) -> String {
        snippet::preview_style(self.font_size_px, &self.color_hex, self.color_user_set)
    }

    pub fn styled_snippet(&self, icon: &str) -> String {
        snippet::styled_snippet(icon, self.font_size_px, &self.color_hex, self.color_user_set)
    }
}

pub fn clamp_font_size(size: i64) -> u32 {
    let clamped = size.clamp(i64::from(MIN_FONT_SIZE_PX), i64::from(MAX_FONT_SIZE_PX));
    u32::try_from(clamped).unwrap_or(DEFAULT_FONT_SIZE_PX)
}

/// Read a number the way a browser `parseInt` does: leading whitespace, an
/// optional sign, then digits up to the first non-digit. `None` when there
/// are no digits.
pub fn parse_size_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_is_clamped() {
        let mut style = StyleOptions::default();
        style.apply(StyleCommand::SetSizeFromInput("5".to_owned()));
        assert_eq!(style.font_size_px(), 10);
        style.apply(StyleCommand::SetSizeFromInput("9999".to_owned()));
        assert_eq!(style.font_size_px(), 500);
        style.apply(StyleCommand::SetSizeFromSlider(-3));
        assert_eq!(style.font_size_px(), 10);
        style.apply(StyleCommand::SetSizeFromSlider(64));
        assert_eq!(style.font_size_px(), 64);
    }

    #[test]
    fn unparseable_input_keeps_size() {
        let mut style = StyleOptions::default();
        style.apply(StyleCommand::SetSizeFromInput("abc".to_owned()));
        assert_eq!(style.font_size_px(), 32);
        style.apply(StyleCommand::SetSizeFromInput("".to_owned()));
        assert_eq!(style.font_size_px(), 32);
    }

    #[test]
    fn parse_like_parse_int() {
        assert_eq!(parse_size_input(" 42px"), Some(42));
        assert_eq!(parse_size_input("-7"), Some(-7));
        assert_eq!(parse_size_input("+12"), Some(12));
        assert_eq!(parse_size_input("px42"), None);
        assert_eq!(parse_size_input("-"), None);
        assert_eq!(parse_size_input("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn color_gate_follows_user_choice() {
        let mut style = StyleOptions::default();
        assert_eq!(style.effective_color(), None);
        assert_eq!(style.styled_snippet("bi-star"), r#"<i class="bi-star" style="font-size: 32px;"></i>"#);

        style.apply(StyleCommand::SetColor("#ff0000".to_owned()));
        assert_eq!(style.effective_color(), Some("#ff0000"));
        assert_eq!(
            style.styled_snippet("bi-star"),
            r#"<i class="bi-star" style="font-size: 32px; color: #ff0000;"></i>"#
        );

        let notice = style.apply(StyleCommand::ResetColor).expect("reset notifies");
        assert_eq!(notice.message, "Color reset to default");
        assert_eq!(style.color_hex(), "#000000");
        assert!(!style.color_user_set());
    }

    #[test]
    fn explicit_black_is_still_a_user_color() {
        let mut style = StyleOptions::default();
        style.apply(StyleCommand::SetColor("#000000".to_owned()));
        assert_eq!(style.preview_style(), "font-size: 32px; color: #000000;");
    }

    #[test]
    fn reset_size_returns_to_default() {
        let mut style = StyleOptions::default();
        style.apply(StyleCommand::SetSizeFromSlider(200));
        let notice = style.apply(StyleCommand::ResetSize).expect("reset notifies");
        assert_eq!(notice.message, "Size reset to 32px");
        assert_eq!(style.font_size_px(), 32);
    }
}
