//! Clipboard writes with a toast either way.

use crate::dom::{self, Elements};
use crate::toast;
use gd_catalog::{CatalogError, CopyKind};
use wasm_bindgen_futures::JsFuture;

async fn write_text(text: &str) -> Result<(), CatalogError> {
    let promise = dom::window().navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| CatalogError::Clipboard(format!("{e:?}")))
}

pub async fn copy(els: &Elements, kind: CopyKind, text: &str) {
    let notice = match write_text(text).await {
        Ok(()) => kind.copied(text),
        Err(err) => {
            gloo_console::error!(err.to_string());
            kind.failed()
        }
    };
    toast::show(els, &notice);
}
