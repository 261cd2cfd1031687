//! IO seams. The browser frontend implements these over `fetch` and `<link>`
//! elements, the CLI over HTTP or the filesystem.

use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

#[async_trait(?Send)]
pub trait ResourceLoader {
    /// Fetch `url` as text. Non-2xx responses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String>;

    /// HEAD-style existence check. Never fails, unreachable means absent.
    async fn exists(&self, url: &str) -> bool;
}

/// Stylesheets added to the page for the selected icon group.
#[async_trait(?Send)]
pub trait StylesheetHost {
    /// Remove every stylesheet tagged for an icon library. Returns how many
    /// were removed; removing none is fine.
    fn remove_tagged(&mut self) -> usize;

    /// Add a stylesheet tagged with `library_id` and wait until it has loaded
    /// or failed.
    async fn attach(&mut self, library_id: &str, href: &str) -> Result<()>;

    fn tagged_count(&self) -> usize;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryLoader {
    resources: HashMap<String, String>,
}

impl InMemoryLoader {
    pub fn with_resource(mut self, url: &str, body: &str) -> Self {
        self.resources.insert(url.to_owned(), body.to_owned());
        self
    }
}

#[async_trait(?Send)]
impl ResourceLoader for InMemoryLoader {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.resources
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogError::resource_load(url, "404 Not Found"))
    }

    async fn exists(&self, url: &str) -> bool {
        self.resources.contains_key(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLink {
    pub library_id: String,
    pub href: String,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStylesheetHost {
    links: Vec<TaggedLink>,
    broken: HashSet<String>,
}

impl InMemoryStylesheetHost {
    /// Links to `href` get attached but report a load failure.
    pub fn with_broken(mut self, href: &str) -> Self {
        self.broken.insert(href.to_owned());
        self
    }

    pub fn links(&self) -> &[TaggedLink] {
        &self.links
    }
}

#[async_trait(?Send)]
impl StylesheetHost for InMemoryStylesheetHost {
    fn remove_tagged(&mut self) -> usize {
        let removed = self.links.len();
        self.links.clear();
        removed
    }

    async fn attach(&mut self, library_id: &str, href: &str) -> Result<()> {
        self.links.push(TaggedLink {
            library_id: library_id.to_owned(),
            href: href.to_owned(),
        });
        if self.broken.contains(href) {
            return Err(CatalogError::resource_load(href, "stylesheet failed to load"));
        }
        Ok(())
    }

    fn tagged_count(&self) -> usize {
        self.links.len()
    }
}
