//! Event binding.
//!
//! Static controls get their own listeners. Group and icon cards are
//! re-rendered constantly, so their buttons are handled by one delegated
//! click listener per grid keyed on `data-action`.

use crate::clipboard;
use crate::dom::{self, Elements};
use crate::render;
use crate::selection;
use crate::state;
use crate::style_modal;
use crate::toast;
use gd_catalog::snippet::basic_snippet;
use gd_catalog::{CopyKind, Notice, StyleCommand};
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlTextAreaElement, MouseEvent};

/// Attach an event listener that lives as long as the page.
fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Helper: attach sync click handler that re-renders afterwards.
macro_rules! on_click {
    ($el:expr, $els:expr, $body:expr) => {{
        let els = $els.clone();
        listen(&$el, "click", move |_: MouseEvent| {
            $body(&els);
            render::render(&els);
        })?;
    }};
}

/// Helper: attach an `input` handler applying a style command.
macro_rules! on_style_input {
    ($el:expr, $els:expr, $command:expr) => {{
        let els = $els.clone();
        listen(&$el, "input", move |_: Event| {
            let notice = state::with_mut(|s| s.state_mut().apply_style($command(&els)));
            render::render(&els);
            toast::show_opt(&els, notice.as_ref());
        })?;
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Navigation ──
    on_click!(els.back_btn, els, |_: &Elements| selection::go_back());

    // ── Search ──
    {
        let els2 = els.clone();
        listen(&els.search_input, "input", move |_: Event| {
            let term = dom::input_value(&els2.search_input);
            state::with_mut(|s| s.state_mut().set_search(&term));
            render::render(&els2);
        })?;
    }
    on_click!(els.clear_btn, els, |_: &Elements| {
        state::with_mut(|s| s.state_mut().clear_search());
    });

    // ── Modal ──
    on_click!(els.close_modal, els, |_: &Elements| {
        state::with_mut(|s| s.state_mut().close_modal());
    });
    {
        let els2 = els.clone();
        listen(&els.style_modal, "click", move |ev: MouseEvent| {
            // Only backdrop clicks close; clicks inside the dialog bubble here too.
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t.id() == "styleModal");
            if on_backdrop {
                state::with_mut(|s| s.state_mut().close_modal());
                render::render(&els2);
            }
        })?;
    }

    // ── Style controls ──
    on_style_input!(els.font_size, els, |els: &Elements| {
        StyleCommand::SetSizeFromSlider(els.font_size.value_as_number() as i64)
    });
    on_style_input!(els.font_size_number, els, |els: &Elements| {
        StyleCommand::SetSizeFromInput(els.font_size_number.value())
    });
    on_style_input!(els.icon_color, els, |els: &Elements| {
        StyleCommand::SetColor(els.icon_color.value())
    });
    bind_reset(els, &els.reset_size, StyleCommand::ResetSize)?;
    bind_reset(els, &els.reset_color, StyleCommand::ResetColor)?;

    // ── Snippet tabs ──
    for tab in &els.code_tabs {
        let Some(selected) = tab.get_attribute("data-tab").as_deref().and_then(style_modal::parse_tab)
        else {
            continue;
        };
        let els2 = els.clone();
        listen(tab, "click", move |_: MouseEvent| {
            state::with_mut(|s| s.state_mut().set_tab(selected));
            render::render(&els2);
        })?;
    }

    // ── Copy code ──
    for btn in &els.copy_code_btns {
        let Some(target) = btn.get_attribute("data-target") else {
            continue;
        };
        let els2 = els.clone();
        listen(btn, "click", move |_: MouseEvent| {
            let Some(textarea) = dom::by_id_typed::<HtmlTextAreaElement>(&target) else {
                return;
            };
            textarea.select();
            let text = textarea.value();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                clipboard::copy(&els3, CopyKind::Code, &text).await;
            });
        })?;
    }

    // ── Card grids ──
    {
        let els2 = els.clone();
        listen(&els.groups_grid, "click", move |ev: MouseEvent| {
            if let Some((action, el)) = action_target(&ev) {
                on_group_action(&els2, &action, &el);
            }
        })?;
    }
    {
        let els2 = els.clone();
        listen(&els.icons_grid, "click", move |ev: MouseEvent| {
            if let Some((action, el)) = action_target(&ev) {
                on_icon_action(&els2, &action, &el);
            }
        })?;
    }

    Ok(())
}

fn bind_reset(els: &Elements, button: &EventTarget, command: StyleCommand) -> Result<(), JsValue> {
    let els2 = els.clone();
    listen(button, "click", move |_: MouseEvent| {
        let notice = state::with_mut(|s| s.state_mut().apply_style(command.clone()));
        render::render(&els2);
        toast::show_opt(&els2, notice.as_ref());
    })
}

/// The nearest element with a `data-action` at or above the click target.
fn action_target(ev: &MouseEvent) -> Option<(String, Element)> {
    let target: Element = ev.target()?.dyn_into().ok()?;
    let el = target.closest("[data-action]").ok()??;
    let action = el.get_attribute("data-action")?;
    Some((action, el))
}

fn on_group_action(els: &Elements, action: &str, el: &Element) {
    let Some(id) = el.get_attribute("data-group") else {
        return;
    };
    let els = els.clone();
    match action {
        "select-group" => wasm_bindgen_futures::spawn_local(async move {
            selection::select_group(&els, &id).await;
        }),
        "download" => wasm_bindgen_futures::spawn_local(async move {
            selection::download(&els, &id).await;
        }),
        other => gloo_console::warn!(format!("unknown group action {other}")),
    }
}

fn on_icon_action(els: &Elements, action: &str, el: &Element) {
    let Some(icon) = el.get_attribute("data-icon") else {
        return;
    };
    match action {
        "copy-class" | "copy-basic" => {
            if let Err(err) = state::with(|s| s.state().require_icon(&icon).map(|_| ())) {
                toast::show(els, &Notice::from(err));
                return;
            }
            let (kind, text) = if action == "copy-class" {
                (CopyKind::ClassName, icon)
            } else {
                (CopyKind::BasicHtml, basic_snippet(&icon))
            };
            let els = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                clipboard::copy(&els, kind, &text).await;
            });
        }
        "open-styled" => {
            match state::with_mut(|s| s.state_mut().open_style_modal(&icon)) {
                Ok(()) => render::render(els),
                Err(err) => toast::show(els, &Notice::from(err)),
            }
        }
        other => gloo_console::warn!(format!("unknown icon action {other}")),
    }
}
