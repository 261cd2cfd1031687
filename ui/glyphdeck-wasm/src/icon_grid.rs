//! Icon browser view: card grid, stats line and loading state.

use crate::dom::{self, Elements};
use gd_catalog::view::{GridView, IconCardView, escape_html};

pub fn render(els: &Elements, grid: &GridView, loading: bool) {
    dom::set_text(&els.total_count, &grid.stats.total.to_string());
    dom::set_text(&els.visible_count, &grid.stats.visible.to_string());

    if loading {
        dom::set_inner_html(&els.icons_grid, r#"<div class="loading">Loading icons...</div>"#);
        return;
    }
    if grid.is_empty() {
        dom::set_inner_html(&els.icons_grid, r#"<div class="no-results">No icons found</div>"#);
        return;
    }

    let html: String = grid.cards.iter().map(card_html).collect();
    dom::set_inner_html(&els.icons_grid, &html);
}

fn card_html(card: &IconCardView) -> String {
    let icon = escape_html(&card.icon);
    format!(
        r#"<div class="icon-card">
    <div class="icon-to-display"><i class="{icon}"></i></div>
    <div class="icon-name">{name}</div>
    <div class="button-group">
        <button class="btn btn-copy" data-action="copy-class" data-icon="{icon}">📋 Copy Class</button>
        <button class="btn btn-generate" data-action="copy-basic" data-icon="{icon}">🔧 Generate HTML</button>
        <button class="btn btn-styled" data-action="open-styled" data-icon="{icon}">🎨 Generate Styled</button>
    </div>
</div>"#,
        name = escape_html(&card.display_name),
    )
}
