//! Display models derived from session state. Rendering the same state twice
//! gives the same models; nothing here is cached.

use crate::session::CatalogSession;
use crate::snippet;
use crate::state::{CatalogState, Phase, SnippetTab};
use gd_api_types::IconGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub prefix: String,
    pub count: u32,
    pub available: bool,
    pub downloadable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCardView {
    pub icon: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub total: usize,
    pub visible: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub cards: Vec<IconCardView>,
    pub stats: StatsView,
}

impl GridView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSwatch {
    Default,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub icon: String,
    pub size_label: String,
    pub swatch: ColorSwatch,
    pub preview_style: String,
    pub basic_snippet: String,
    pub styled_snippet: String,
    pub tab: SnippetTab,
}

impl PreviewView {
    pub fn active_snippet(&self) -> &str {
        match self.tab {
            SnippetTab::Basic => &self.basic_snippet,
            SnippetTab::Styled => &self.styled_snippet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Groups(Vec<GroupCardView>),
    Icons {
        group_name: String,
        prefix: String,
        loading: bool,
        grid: GridView,
    },
}

pub fn group_card(group: &IconGroup) -> GroupCardView {
    GroupCardView {
        id: group.id.clone(),
        name: group.name.clone(),
        description: group.description.clone(),
        prefix: group.prefix.clone(),
        count: group.count,
        available: group.is_available(),
        downloadable: group.download_path().is_some(),
    }
}

pub fn group_cards(groups: &[IconGroup]) -> Vec<GroupCardView> {
    groups.iter().map(group_card).collect()
}

pub fn icon_grid(state: &CatalogState) -> GridView {
    let visible = state.visible_icons();
    GridView {
        stats: StatsView {
            total: state.icons().len(),
            visible: visible.len(),
        },
        cards: visible
            .into_iter()
            .map(|icon| IconCardView {
                icon: icon.to_owned(),
                display_name: icon.to_owned(),
            })
            .collect(),
    }
}

/// The modal preview, present while the modal is open.
pub fn preview(state: &CatalogState) -> Option<PreviewView> {
    if !state.modal_open() {
        return None;
    }
    let icon = state.current_icon()?;
    let style = state.style();

    Some(PreviewView {
        icon: icon.to_owned(),
        size_label: format!("{}px", style.font_size_px()),
        swatch: match style.effective_color() {
            Some(color) => ColorSwatch::Custom(color.to_owned()),
            None => ColorSwatch::Default,
        },
        preview_style: style.preview_style(),
        basic_snippet: snippet::basic_snippet(icon),
        styled_snippet: style.styled_snippet(icon),
        tab: state.tab(),
    })
}

pub fn page(session: &CatalogSession) -> PageView {
    let state = session.state();
    match state.current_group() {
        None => PageView::Groups(group_cards(session.groups().groups())),
        Some(group) => PageView::Icons {
            group_name: group.name.clone(),
            prefix: group.prefix.clone(),
            loading: state.phase() == Phase::Loading,
            grid: icon_grid(state),
        },
    }
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::groups::GroupCatalog;
    use crate::style::StyleCommand;
    use gd_extract::Extraction;

    fn ready_session() -> CatalogSession {
        let groups = GroupCatalog::from_json(
            r#"{"iconGroups": [
                {"id": "bi", "name": "Bootstrap", "description": "Official", "prefix": "bi-",
                 "cssPath": "bi.css", "demoPath": "bi.html", "downloadPath": "bi.zip", "count": 2},
                {"id": "fe", "name": "Feather", "prefix": "fe-",
                 "cssPath": "fe.css", "demoPath": "fe.html", "count": 0}
            ]}"#,
        )
        .expect("manifest should parse");
        let mut session = CatalogSession::new(AppConfig::default(), groups);
        let ticket = session.begin_select("bi").expect("bi is available");
        session.finish_select(
            &ticket,
            crate::session::GroupLoad {
                extraction: Extraction {
                    icons: vec!["bi-moon".to_owned(), "bi-star".to_owned()],
                    used_placeholders: false,
                },
                notice: None,
            },
        );
        session
    }

    #[test]
    fn group_cards_reflect_availability() {
        let session = CatalogSession::new(
            AppConfig::default(),
            ready_session().groups().clone(),
        );
        let PageView::Groups(cards) = page(&session) else {
            panic!("expected group list");
        };
        assert_eq!(cards.len(), 2);
        assert!(cards[0].available && cards[0].downloadable);
        assert!(!cards[1].available && !cards[1].downloadable);
    }

    #[test]
    fn grid_shows_filtered_icons_and_stats() {
        let mut session = ready_session();
        session.state_mut().set_search("star");

        let PageView::Icons { grid, loading, .. } = page(&session) else {
            panic!("expected icon grid");
        };
        assert!(!loading);
        assert_eq!(grid.stats, StatsView { total: 2, visible: 1 });
        assert_eq!(grid.cards[0].icon, "bi-star");
        assert_eq!(grid.cards[0].display_name, "bi-star");

        session.state_mut().set_search("zzz");
        assert!(icon_grid(session.state()).is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let session = ready_session();
        assert_eq!(page(&session), page(&session));
        assert_eq!(preview(session.state()), preview(session.state()));
    }

    #[test]
    fn preview_tracks_style_state() {
        let mut session = ready_session();
        assert_eq!(preview(session.state()), None);

        let state = session.state_mut();
        state.open_style_modal("bi-star").expect("icon is loaded");
        let view = preview(state).expect("modal is open");
        assert_eq!(view.size_label, "32px");
        assert_eq!(view.swatch, ColorSwatch::Default);
        assert_eq!(view.active_snippet(), r#"<i class="bi-star"></i>"#);

        state.apply_style(StyleCommand::SetSizeFromSlider(48));
        state.apply_style(StyleCommand::SetColor("#ff0000".to_owned()));
        state.set_tab(SnippetTab::Styled);
        let view = preview(state).expect("modal is open");
        assert_eq!(view.swatch, ColorSwatch::Custom("#ff0000".to_owned()));
        assert_eq!(view.preview_style, "font-size: 48px; color: #ff0000;");
        assert_eq!(
            view.active_snippet(),
            r#"<i class="bi-star" style="font-size: 48px; color: #ff0000;"></i>"#
        );

        state.close_modal();
        assert_eq!(preview(state), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
