//! Icon library `<link>` management in `<head>`.

use crate::dom;
use async_trait::async_trait;
use gd_catalog::config::LIBRARY_TAG_ATTR;
use gd_catalog::resource::StylesheetHost;
use gd_catalog::{CatalogError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlLinkElement};

#[derive(Debug, Default, Clone, Copy)]
pub struct DomStylesheets;

fn tagged_links() -> Vec<Element> {
    dom::query_all(&format!("link[{LIBRARY_TAG_ATTR}]"))
}

fn js_err(href: &str, e: JsValue) -> CatalogError {
    CatalogError::resource_load(href, format!("{e:?}"))
}

#[async_trait(?Send)]
impl StylesheetHost for DomStylesheets {
    fn remove_tagged(&mut self) -> usize {
        let links = tagged_links();
        for link in &links {
            link.remove();
        }
        links.len()
    }

    async fn attach(&mut self, library_id: &str, href: &str) -> Result<()> {
        let link: HtmlLinkElement = dom::create_element("link")
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().map_err(JsValue::from))
            .map_err(|e| js_err(href, e))?;
        link.set_rel("stylesheet");
        link.set_attribute(LIBRARY_TAG_ATTR, library_id)
            .map_err(|e| js_err(href, e))?;

        // Handlers must be in place before the href starts the load.
        let settled = js_sys::Promise::new(&mut |resolve, reject| {
            link.set_onload(Some(&resolve));
            link.set_onerror(Some(&reject));
        });
        link.set_href(href);
        gloo_utils::head()
            .append_child(&link)
            .map_err(|e| js_err(href, e))?;

        let outcome = JsFuture::from(settled).await;
        link.set_onload(None);
        link.set_onerror(None);

        match outcome {
            Ok(_) => {
                gloo_console::debug!(format!("stylesheet {href} loaded for {library_id}"));
                Ok(())
            }
            Err(_) => Err(CatalogError::resource_load(href, "stylesheet failed to load")),
        }
    }

    fn tagged_count(&self) -> usize {
        tagged_links().len()
    }
}
