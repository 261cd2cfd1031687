//! Group card markup for the landing view.

use crate::dom::{self, Elements};
use gd_catalog::view::{GroupCardView, escape_html};

pub fn render(els: &Elements, cards: &[GroupCardView]) {
    if cards.is_empty() {
        dom::set_inner_html(
            &els.groups_grid,
            r#"<div class="no-results">No icon groups available</div>"#,
        );
        return;
    }

    let html: String = cards.iter().map(card_html).collect();
    dom::set_inner_html(&els.groups_grid, &html);
}

fn card_html(card: &GroupCardView) -> String {
    let id = escape_html(&card.id);
    let status = if card.available {
        format!("{} icons", card.count)
    } else {
        "Coming soon".to_owned()
    };
    let download = if card.downloadable {
        format!(
            r#"<button class="btn btn-download" data-action="download" data-group="{id}">⬇ Download</button>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="group-card{unavailable}" data-action="select-group" data-group="{id}">
    <h3 class="group-name">{name}</h3>
    <p class="group-description">{description}</p>
    <div class="group-meta">
        <span class="group-prefix">{prefix}</span>
        <span class="group-count">{status}</span>
    </div>
    {download}
</div>"#,
        unavailable = if card.available { "" } else { " coming-soon" },
        name = escape_html(&card.name),
        description = escape_html(&card.description),
        prefix = escape_html(&card.prefix),
    )
}
