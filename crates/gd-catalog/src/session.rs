//! Group selection and download flows over the resource traits.
//!
//! The browser keeps a [`CatalogSession`] in a thread-local and cannot hold a
//! borrow across an await, so the selection flow is split in three steps:
//! [`CatalogSession::begin_select`], [`load_group_resources`], and
//! [`CatalogSession::finish_select`]. [`CatalogSession::select_group`] chains
//! them for callers that own the session outright.

use crate::config::AppConfig;
use crate::error::{CatalogError, Result};
use crate::groups::{self, GroupCatalog};
use crate::notice::Notice;
use crate::resource::{ResourceLoader, StylesheetHost};
use crate::state::{CatalogState, LoadTicket};
use gd_api_types::IconGroup;
use gd_extract::{Extraction, extract_or_placeholder, placeholder_extraction};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    config: AppConfig,
    groups: GroupCatalog,
    state: CatalogState,
}

/// What the IO half of a selection produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLoad {
    pub extraction: Extraction,
    pub notice: Option<Notice>,
}

impl CatalogSession {
    pub fn new(config: AppConfig, groups: GroupCatalog) -> Self {
        Self {
            config,
            groups,
            state: CatalogState::default(),
        }
    }

    /// Load the manifest named by `config`. An unreadable manifest leaves the
    /// session with no groups and returns the notice to display.
    pub async fn load(config: AppConfig, loader: &dyn ResourceLoader) -> (Self, Option<Notice>) {
        let (groups, err) = groups::load_group_catalog(loader, &config.config_url).await;
        (Self::new(config, groups), err.map(Notice::from))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn groups(&self) -> &GroupCatalog {
        &self.groups
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CatalogState {
        &mut self.state
    }

    pub fn begin_select(&mut self, id: &str) -> Result<LoadTicket> {
        self.state.begin_selection(&self.groups, id)
    }

    pub fn finish_select(&mut self, ticket: &LoadTicket, load: GroupLoad) -> Option<Notice> {
        if self.state.complete_selection(ticket, load.extraction) {
            info!(
                "group '{}' ready with {} icons",
                ticket.group().id,
                self.state.icons().len()
            );
            load.notice
        } else {
            None
        }
    }

    /// Full selection flow. Errors (unknown or empty group) come back as the
    /// notice; the state is untouched in that case.
    pub async fn select_group(
        &mut self,
        id: &str,
        loader: &dyn ResourceLoader,
        stylesheets: &mut dyn StylesheetHost,
    ) -> Option<Notice> {
        let ticket = match self.begin_select(id) {
            Ok(ticket) => ticket,
            Err(err) => return Some(err.into()),
        };
        let load = load_group_resources(ticket.group(), loader, stylesheets).await;
        self.finish_select(&ticket, load)
    }

    pub fn go_back(&mut self, stylesheets: &mut dyn StylesheetHost) {
        self.state.go_back();
        let removed = stylesheets.remove_tagged();
        if removed > 0 {
            info!("removed {} icon library stylesheet(s)", removed);
        }
    }

    /// Resolve the download URL of group `id`, checking that it exists.
    pub async fn prepare_download(&self, id: &str, loader: &dyn ResourceLoader) -> Result<String> {
        let group = self
            .groups
            .get(id)
            .ok_or_else(|| CatalogError::GroupNotFound(id.to_owned()))?;
        download_url(group, loader).await
    }
}

/// Swap the tagged stylesheet over to `group` and extract its icons. Never
/// fails: stylesheet errors are logged, demo errors fall back to placeholders.
pub async fn load_group_resources(
    group: &IconGroup,
    loader: &dyn ResourceLoader,
    stylesheets: &mut dyn StylesheetHost,
) -> GroupLoad {
    stylesheets.remove_tagged();
    if let Err(err) = stylesheets.attach(&group.id, &group.css_path).await {
        warn!("stylesheet for '{}' did not load: {}", group.id, err);
    }

    let extraction = match loader.fetch_text(&group.demo_path).await {
        Ok(html) => extract_or_placeholder(&html, &group.prefix),
        Err(err) => {
            warn!("demo page for '{}' unavailable: {}", group.id, err);
            placeholder_extraction(&group.prefix)
        }
    };

    let notice = extraction.used_placeholders.then(|| {
        Notice::error(format!(
            "Could not load icons for {}, showing placeholders",
            group.name
        ))
    });

    GroupLoad { extraction, notice }
}

pub async fn download_url(group: &IconGroup, loader: &dyn ResourceLoader) -> Result<String> {
    let Some(path) = group.download_path() else {
        return Err(CatalogError::DownloadUnavailable(group.name.clone()));
    };
    if !loader.exists(path).await {
        return Err(CatalogError::DownloadUnavailable(group.name.clone()));
    }
    Ok(path.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{InMemoryLoader, InMemoryStylesheetHost};
    use crate::state::Phase;

    const MANIFEST: &str = r#"{
        "iconGroups": [
            {"id": "bootstrap", "name": "Bootstrap Icons", "prefix": "bi-",
             "cssPath": "bi.css", "demoPath": "bi.html",
             "downloadPath": "bi.zip", "count": 3},
            {"id": "remix", "name": "Remix Icons", "prefix": "ri-",
             "cssPath": "ri.css", "demoPath": "ri.html",
             "downloadPath": "missing.zip", "count": 2},
            {"id": "feather", "name": "Feather", "prefix": "fe-",
             "cssPath": "fe.css", "demoPath": "fe.html", "count": 0}
        ]
    }"#;

    const BI_DEMO: &str = r#"
        <div class="glyph"><span class="bi-star" aria-hidden="true"></span><span class="mls">bi-star</span></div>
        <div class="glyph"><span class="bi-moon" aria-hidden="true"></span><span class="mls">bi-moon</span></div>
    "#;

    fn loader() -> InMemoryLoader {
        InMemoryLoader::default()
            .with_resource("config.json", MANIFEST)
            .with_resource("bi.html", BI_DEMO)
            .with_resource("bi.zip", "PK")
    }

    async fn session(loader: &InMemoryLoader) -> CatalogSession {
        let config = AppConfig::with_config_url(Some("config.json".to_owned()));
        let (session, notice) = CatalogSession::load(config, loader).await;
        assert_eq!(notice, None);
        session
    }

    #[tokio::test]
    async fn select_group_loads_icons_and_stylesheet() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default();
        let mut session = session(&loader).await;

        let notice = session.select_group("bootstrap", &loader, &mut host).await;
        assert_eq!(notice, None);
        assert_eq!(session.state().phase(), Phase::Ready);
        assert_eq!(session.state().icons().icons(), ["bi-moon".to_owned(), "bi-star".to_owned()]);
        assert_eq!(host.tagged_count(), 1);
        assert_eq!(host.links()[0].library_id, "bootstrap");
        Ok(())
    }

    #[tokio::test]
    async fn missing_demo_falls_back_with_notice() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default().with_broken("ri.css");
        let mut session = session(&loader).await;

        let notice = session
            .select_group("remix", &loader, &mut host)
            .await
            .expect("fallback is announced");
        assert!(notice.is_error());
        assert_eq!(session.state().phase(), Phase::Ready);
        assert_eq!(session.state().icons().len(), 50);
        assert_eq!(session.state().icons().icons()[0], "ri--placeholder-0");
        Ok(())
    }

    #[tokio::test]
    async fn back_then_select_never_stacks_stylesheets() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default();
        let mut session = session(&loader).await;

        session.select_group("bootstrap", &loader, &mut host).await;
        session.go_back(&mut host);
        assert_eq!(host.tagged_count(), 0);

        session.select_group("remix", &loader, &mut host).await;
        assert_eq!(host.tagged_count(), 1);
        assert_eq!(host.links()[0].library_id, "remix");

        session.select_group("bootstrap", &loader, &mut host).await;
        assert_eq!(host.tagged_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn go_back_twice_is_harmless() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default();
        let mut session = session(&loader).await;

        session.go_back(&mut host);
        session.go_back(&mut host);
        assert_eq!(session.state().phase(), Phase::NoGroupSelected);
        Ok(())
    }

    #[tokio::test]
    async fn coming_soon_group_keeps_current_selection() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default();
        let mut session = session(&loader).await;
        session.select_group("bootstrap", &loader, &mut host).await;

        let notice = session
            .select_group("feather", &loader, &mut host)
            .await
            .expect("coming soon is announced");
        assert_eq!(notice.message, "Feather is coming soon");
        assert_eq!(session.state().current_group().map(|g| g.id.as_str()), Some("bootstrap"));
        assert_eq!(host.links()[0].library_id, "bootstrap");
        Ok(())
    }

    #[tokio::test]
    async fn stale_completion_does_not_overwrite_newer_selection() -> anyhow::Result<()> {
        let loader = loader();
        let mut host = InMemoryStylesheetHost::default();
        let mut session = session(&loader).await;

        let old = session.begin_select("bootstrap")?;
        let new = session.begin_select("remix")?;

        let new_load = load_group_resources(new.group(), &loader, &mut host).await;
        session.finish_select(&new, new_load);
        let old_load = GroupLoad {
            extraction: extract_or_placeholder(BI_DEMO, "bi-"),
            notice: None,
        };
        assert_eq!(session.finish_select(&old, old_load), None);

        assert_eq!(session.state().current_group().map(|g| g.id.as_str()), Some("remix"));
        assert!(session.state().icons().icons().iter().all(|icon| icon.starts_with("ri-")));
        Ok(())
    }

    #[tokio::test]
    async fn download_checks_existence() -> anyhow::Result<()> {
        let loader = loader();
        let session = session(&loader).await;

        assert_eq!(session.prepare_download("bootstrap", &loader).await?, "bi.zip");
        assert_eq!(
            session.prepare_download("remix", &loader).await,
            Err(CatalogError::DownloadUnavailable("Remix Icons".to_owned()))
        );
        assert_eq!(
            session.prepare_download("feather", &loader).await,
            Err(CatalogError::DownloadUnavailable("Feather".to_owned()))
        );
        assert_eq!(
            session.prepare_download("nope", &loader).await,
            Err(CatalogError::GroupNotFound("nope".to_owned()))
        );
        Ok(())
    }
}
