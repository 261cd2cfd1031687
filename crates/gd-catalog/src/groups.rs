//! The list of icon groups loaded from the manifest.

use crate::error::{CatalogError, Result};
use crate::resource::ResourceLoader;
use gd_api_types::{IconGroup, IconGroupsConfig};
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCatalog {
    groups: Vec<IconGroup>,
}

impl GroupCatalog {
    /// Build a catalog keeping manifest order. Later duplicates of an id are dropped.
    pub fn new(groups: Vec<IconGroup>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(groups.len());
        for group in groups {
            if seen.insert(group.id.clone()) {
                unique.push(group);
            } else {
                warn!("duplicate icon group id '{}' ignored", group.id);
            }
        }
        Self { groups: unique }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: IconGroupsConfig =
            serde_json::from_str(raw).map_err(|err| CatalogError::InvalidConfig(err.to_string()))?;
        Ok(Self::new(config.icon_groups))
    }

    pub fn get(&self, id: &str) -> Option<&IconGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn groups(&self) -> &[IconGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Fetch and parse the manifest at `url`.
pub async fn fetch_group_catalog(loader: &dyn ResourceLoader, url: &str) -> Result<GroupCatalog> {
    let raw = loader.fetch_text(url).await?;
    let catalog = GroupCatalog::from_json(&raw)?;
    info!("loaded {} icon groups from {}", catalog.len(), url);
    Ok(catalog)
}

/// Like [`fetch_group_catalog`] but never fails: an unreadable manifest
/// yields an empty catalog plus the error to show the user.
pub async fn load_group_catalog(
    loader: &dyn ResourceLoader,
    url: &str,
) -> (GroupCatalog, Option<CatalogError>) {
    match fetch_group_catalog(loader, url).await {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            warn!("failed to load icon groups: {}", err);
            (GroupCatalog::default(), Some(err))
        }
    }
}
