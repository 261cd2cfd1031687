//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Raw input value, untrimmed (search terms keep their spaces).
pub fn input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// `data-config-url` on `<body>`, if the page sets one.
pub fn body_config_url() -> Option<String> {
    gloo_utils::body().get_attribute("data-config-url")
}

// ── Elements struct ──

/// All DOM element references used by the browser UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Group list
    pub groups_view: Element,
    pub groups_grid: Element,

    // Icon browser
    pub icons_view: Element,
    pub icons_grid: Element,
    pub current_group_name: Element,
    pub back_btn: HtmlElement,
    pub search_input: HtmlInputElement,
    pub clear_btn: HtmlElement,
    pub total_count: Element,
    pub visible_count: Element,

    // Style modal
    pub style_modal: Element,
    pub close_modal: HtmlElement,
    pub modal_icon_name: Element,
    pub preview_icon: Element,
    pub size_display: Element,
    pub font_size: HtmlInputElement,
    pub font_size_number: HtmlInputElement,
    pub icon_color: HtmlInputElement,
    pub color_preview: Element,
    pub reset_size: HtmlElement,
    pub reset_color: HtmlElement,
    pub html_code: HtmlTextAreaElement,
    pub styled_code: HtmlTextAreaElement,
    pub code_tabs: Vec<Element>,
    pub code_panels: Vec<Element>,
    pub copy_code_btns: Vec<Element>,

    pub toast: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            groups_view: get_el!("groupsView"),
            groups_grid: get_el!("groupsGrid"),

            icons_view: get_el!("iconsView"),
            icons_grid: get_el!("iconsGrid"),
            current_group_name: get_el!("currentGroupName"),
            back_btn: get_html!("backBtn"),
            search_input: get_input!("searchInput"),
            clear_btn: get_html!("clearBtn"),
            total_count: get_el!("totalCount"),
            visible_count: get_el!("visibleCount"),

            style_modal: get_el!("styleModal"),
            close_modal: get_html!("closeModal"),
            modal_icon_name: get_el!("modalIconName"),
            preview_icon: get_el!("previewIcon"),
            size_display: get_el!("sizeDisplay"),
            font_size: get_input!("fontSize"),
            font_size_number: get_input!("fontSizeNumber"),
            icon_color: get_input!("iconColor"),
            color_preview: get_el!("colorPreview"),
            reset_size: get_html!("resetSize"),
            reset_color: get_html!("resetColor"),
            html_code: get_textarea!("htmlCode"),
            styled_code: get_textarea!("styledCode"),
            code_tabs: query_all(".code-tab"),
            code_panels: query_all(".code-panel"),
            copy_code_btns: query_all(".copy-code-btn"),

            toast: get_el!("toast"),
        })
    }
}
