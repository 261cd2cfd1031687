//! Resource fetching.
//!
//! `BrowserLoader` is the `fetch`-backed [`ResourceLoader`]: GET through
//! gloo-net for text, a raw `HEAD` request for existence checks. Relative
//! paths resolve against the page, exactly as the manifest writes them.

use crate::dom;
use async_trait::async_trait;
use gd_catalog::resource::ResourceLoader;
use gd_catalog::{CatalogError, Result};
use gloo_net::http::Request as HttpRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, Request, RequestInit, Response};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLoader;

/// GET `url` and return the body. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
    let resp = HttpRequest::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::resource_load(url, e))?;

    if !resp.ok() {
        return Err(CatalogError::resource_load(
            url,
            format!("HTTP {} {}", resp.status(), resp.status_text()),
        ));
    }

    resp.text()
        .await
        .map_err(|e| CatalogError::resource_load(url, e))
}

/// HEAD `url`. Network errors count as absent.
pub async fn head_ok(url: &str) -> bool {
    match head(url).await {
        Ok(ok) => ok,
        Err(e) => {
            gloo_console::warn!(format!("HEAD {url} failed: {e:?}"));
            false
        }
    }
}

async fn head(url: &str) -> std::result::Result<bool, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("HEAD");

    let request = Request::new_with_str_and_init(url, &opts)?;
    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    Ok(resp.ok())
}

#[async_trait(?Send)]
impl ResourceLoader for BrowserLoader {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        fetch_text(url).await
    }

    async fn exists(&self, url: &str) -> bool {
        head_ok(url).await
    }
}

/// Start a browser download of `url` through a temporary anchor element.
pub fn trigger_download(url: &str) -> std::result::Result<(), JsValue> {
    let anchor: HtmlAnchorElement = dom::create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    // Empty value keeps the server's file name.
    anchor.set_download("");
    let _ = anchor.style().set_property("display", "none");

    let body = gloo_utils::body();
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
