//! Group selection, back navigation and downloads.
//!
//! Selection runs in three steps so no session borrow is held across an
//! await: `begin_select` hands out a ticket, the IO runs against the DOM and
//! network, then `finish_select` applies the result only if the ticket is
//! still current.

use crate::api::{self, BrowserLoader};
use crate::dom::Elements;
use crate::render;
use crate::state;
use crate::stylesheet::DomStylesheets;
use crate::toast;
use gd_catalog::session::{download_url, load_group_resources};
use gd_catalog::{CatalogError, Notice};

pub async fn select_group(els: &Elements, id: &str) {
    let ticket = match state::with_mut(|s| s.begin_select(id)) {
        Ok(ticket) => ticket,
        Err(err) => {
            toast::show(els, &Notice::from(err));
            return;
        }
    };
    render::render(els);

    let load = load_group_resources(ticket.group(), &BrowserLoader, &mut DomStylesheets).await;
    let notice = state::with_mut(|s| s.finish_select(&ticket, load));

    render::render(els);
    toast::show_opt(els, notice.as_ref());
}

/// Drop the selection and its stylesheet. The caller re-renders.
pub fn go_back() {
    state::with_mut(|s| s.go_back(&mut DomStylesheets));
}

pub async fn download(els: &Elements, id: &str) {
    let Some(group) = state::with(|s| s.groups().get(id).cloned()) else {
        toast::show(els, &CatalogError::GroupNotFound(id.to_owned()).into());
        return;
    };

    match download_url(&group, &BrowserLoader).await {
        Ok(url) => {
            if let Err(e) = api::trigger_download(&url) {
                gloo_console::error!(format!("download of {url} failed: {e:?}"));
                toast::show(els, &CatalogError::DownloadUnavailable(group.name).into());
            }
        }
        Err(err) => toast::show(els, &err.into()),
    }
}
