//! Selection state machine.
//!
//! `NoGroupSelected` → `Loading` → `Ready`, and back to `NoGroupSelected` on
//! [`CatalogState::go_back`]. Every selection gets a fresh generation number;
//! a load only commits if its [`LoadTicket`] still carries the current one, so
//! a slow response for an abandoned group cannot overwrite a newer selection.

use crate::catalog::IconCatalog;
use crate::error::{CatalogError, Result};
use crate::groups::GroupCatalog;
use crate::notice::Notice;
use crate::style::{StyleCommand, StyleOptions};
use gd_api_types::IconGroup;
use gd_extract::Extraction;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoGroupSelected,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnippetTab {
    #[default]
    Basic,
    Styled,
}

/// Handed out by [`CatalogState::begin_selection`], redeemed by
/// [`CatalogState::complete_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    group: IconGroup,
}

impl LoadTicket {
    pub fn group(&self) -> &IconGroup {
        &self.group
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    generation: u64,
    current_group: Option<IconGroup>,
    loading: bool,
    icons: IconCatalog,
    current_icon: Option<String>,
    style: StyleOptions,
    search: String,
    modal_open: bool,
    tab: SnippetTab,
}

impl CatalogState {
    pub fn phase(&self) -> Phase {
        match (&self.current_group, self.loading) {
            (None, _) => Phase::NoGroupSelected,
            (Some(_), true) => Phase::Loading,
            (Some(_), false) => Phase::Ready,
        }
    }

    pub fn current_group(&self) -> Option<&IconGroup> {
        self.current_group.as_ref()
    }

    pub fn current_icon(&self) -> Option<&str> {
        self.current_icon.as_deref()
    }

    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }

    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn tab(&self) -> SnippetTab {
        self.tab
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Validate `id` and move to `Loading`. Unknown and empty groups are
    /// rejected without touching any state.
    pub fn begin_selection(&mut self, groups: &GroupCatalog, id: &str) -> Result<LoadTicket> {
        let group = groups
            .get(id)
            .ok_or_else(|| CatalogError::GroupNotFound(id.to_owned()))?;
        if !group.is_available() {
            return Err(CatalogError::ComingSoon(group.name.clone()));
        }

        let group = group.clone();
        self.reset_selection();
        self.current_group = Some(group.clone());
        self.loading = true;
        debug!(group = %group.id, generation = self.generation, "selection started");

        Ok(LoadTicket {
            generation: self.generation,
            group,
        })
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.loading && ticket.generation == self.generation
    }

    /// Commit extracted icons. Returns `false` and changes nothing when the
    /// ticket has been superseded.
    pub fn complete_selection(&mut self, ticket: &LoadTicket, extraction: Extraction) -> bool {
        if !self.is_current(ticket) {
            debug!(
                group = %ticket.group.id,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale icon load"
            );
            return false;
        }

        self.icons = IconCatalog::from_extraction(extraction);
        self.loading = false;
        true
    }

    pub fn go_back(&mut self) {
        self.reset_selection();
        debug!(generation = self.generation, "returned to group list");
    }

    fn reset_selection(&mut self) {
        self.generation += 1;
        self.current_group = None;
        self.loading = false;
        self.icons = IconCatalog::default();
        self.current_icon = None;
        self.search.clear();
        self.modal_open = false;
        self.tab = SnippetTab::Basic;
    }

    /// Look `icon` up in the loaded catalog.
    pub fn require_icon<'a>(&self, icon: &'a str) -> Result<&'a str> {
        if self.icons.contains(icon) {
            Ok(icon)
        } else {
            Err(CatalogError::IconNotFound(icon.to_owned()))
        }
    }

    /// Open the style modal for `icon` with default size and color.
    pub fn open_style_modal(&mut self, icon: &str) -> Result<()> {
        self.require_icon(icon)?;
        self.current_icon = Some(icon.to_owned());
        self.style = StyleOptions::default();
        self.tab = SnippetTab::Basic;
        self.modal_open = true;
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn set_tab(&mut self, tab: SnippetTab) {
        self.tab = tab;
    }

    pub fn apply_style(&mut self, command: StyleCommand) -> Option<Notice> {
        self.style.apply(command)
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_owned();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn visible_icons(&self) -> Vec<&str> {
        self.icons.filter(&self.search)
    }
}
