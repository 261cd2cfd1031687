//! Full-page render from the current session.
//!
//! Every handler mutates the session and then calls [`render`]. The view
//! models are recomputed each time; rendering twice changes nothing.

use crate::dom::{self, Elements};
use crate::group_list;
use crate::icon_grid;
use crate::state;
use crate::style_modal;
use gd_catalog::view::{self, PageView};

pub fn render(els: &Elements) {
    let (page, preview, style, search) = state::with(|s| {
        (
            view::page(s),
            view::preview(s.state()),
            s.state().style().clone(),
            s.state().search_term().to_owned(),
        )
    });

    match &page {
        PageView::Groups(cards) => {
            dom::toggle_class(&els.groups_view, "hidden", false);
            dom::toggle_class(&els.icons_view, "hidden", true);
            group_list::render(els, cards);
        }
        PageView::Icons {
            group_name,
            prefix,
            loading,
            grid,
        } => {
            dom::toggle_class(&els.groups_view, "hidden", true);
            dom::toggle_class(&els.icons_view, "hidden", false);
            dom::set_text(&els.current_group_name, group_name);
            let _ = els.icons_view.set_attribute("data-prefix", prefix);
            if dom::input_value(&els.search_input) != search {
                els.search_input.set_value(&search);
            }
            icon_grid::render(els, grid, *loading);
        }
    }

    style_modal::render(els, preview.as_ref(), &style);
}
