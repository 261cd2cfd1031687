//! HTML snippets handed to the clipboard.

/// `<i class="ICON"></i>`, whatever the style settings are.
pub fn basic_snippet(icon: &str) -> String {
    format!(r#"<i class="{icon}"></i>"#)
}

/// Inline style for a styled icon. The color declaration is emitted only when
/// the user picked a color.
pub fn preview_style(size_px: u32, color_hex: &str, color_user_set: bool) -> String {
    let mut style = format!("font-size: {size_px}px;");
    if color_user_set {
        style.push_str(&format!(" color: {color_hex};"));
    }
    style
}

pub fn styled_snippet(icon: &str, size_px: u32, color_hex: &str, color_user_set: bool) -> String {
    let style = preview_style(size_px, color_hex, color_user_set);
    format!(r#"<i class="{icon}" style="{style}"></i>"#)
}
