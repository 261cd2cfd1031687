//! Styled-snippet modal: preview, controls and code panels.

use crate::dom::{self, Elements};
use gd_catalog::{SnippetTab, StyleOptions};
use gd_catalog::view::{ColorSwatch, PreviewView, escape_html};

pub fn tab_name(tab: SnippetTab) -> &'static str {
    match tab {
        SnippetTab::Basic => "basic",
        SnippetTab::Styled => "styled",
    }
}

pub fn parse_tab(name: &str) -> Option<SnippetTab> {
    match name {
        "basic" => Some(SnippetTab::Basic),
        "styled" => Some(SnippetTab::Styled),
        _ => None,
    }
}

/// Sync the modal with `preview`; `None` closes it. The color picker shows
/// `style`'s stored color even while the swatch reads "Default".
pub fn render(els: &Elements, preview: Option<&PreviewView>, style: &StyleOptions) {
    let Some(preview) = preview else {
        dom::remove_class(&els.style_modal, "active");
        return;
    };
    dom::add_class(&els.style_modal, "active");

    dom::set_text(&els.modal_icon_name, &preview.icon);
    dom::set_inner_html(
        &els.preview_icon,
        &format!(
            r#"<i class="{}" style="{}"></i>"#,
            escape_html(&preview.icon),
            escape_html(&preview.preview_style)
        ),
    );

    dom::set_text(&els.size_display, &preview.size_label);
    let size = style.font_size_px().to_string();
    set_if_changed(&els.font_size, &size);
    set_if_changed(&els.font_size_number, &size);
    set_if_changed(&els.icon_color, style.color_hex());

    match &preview.swatch {
        ColorSwatch::Default => {
            dom::set_style(&els.color_preview, "background-color", "transparent");
            dom::set_style(&els.color_preview, "border", "2px dashed #ddd");
            dom::set_text(&els.color_preview, "Default");
        }
        ColorSwatch::Custom(color) => {
            dom::set_style(&els.color_preview, "background-color", color);
            dom::set_style(&els.color_preview, "border", "2px solid #ddd");
            dom::set_text(&els.color_preview, "");
        }
    }

    els.html_code.set_value(&preview.basic_snippet);
    els.styled_code.set_value(&preview.styled_snippet);

    let active = tab_name(preview.tab);
    for el in els.code_tabs.iter().chain(&els.code_panels) {
        let is_active = el.get_attribute("data-tab").as_deref() == Some(active);
        dom::toggle_class(el, "active", is_active);
    }
}

// Rewriting an input's value while the user edits it moves the caret.
fn set_if_changed(input: &web_sys::HtmlInputElement, value: &str) {
    if input.value() != value {
        input.set_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_round_trip() {
        for tab in [SnippetTab::Basic, SnippetTab::Styled] {
            assert_eq!(parse_tab(tab_name(tab)), Some(tab));
        }
        assert_eq!(parse_tab("css"), None);
    }
}
