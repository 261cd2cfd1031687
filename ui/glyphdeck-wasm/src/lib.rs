//! GlyphDeck browser frontend.
//!
//! Pure Rust + WASM: the catalog core from `gd-catalog` driven by DOM
//! events. Each concern lives in its own module; all state sits in
//! [`state`] and every change ends in [`render::render`].

pub mod api;
pub mod clipboard;
pub mod dom;
pub mod events;
pub mod group_list;
pub mod icon_grid;
pub mod render;
pub mod selection;
pub mod state;
pub mod style_modal;
pub mod stylesheet;
pub mod toast;

use gd_catalog::{AppConfig, CatalogSession};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let config = AppConfig::with_config_url(dom::body_config_url());
    gloo_console::log!(format!("loading icon groups from {}", config.config_url));

    let (session, notice) = CatalogSession::load(config, &api::BrowserLoader).await;
    gloo_console::log!(format!("{} icon groups available", session.groups().len()));
    state::replace(session);

    events::bind_events(&els)?;
    render::render(&els);
    toast::show_opt(&els, notice.as_ref());

    Ok(())
}
