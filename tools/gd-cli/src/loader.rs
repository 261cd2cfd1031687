use async_trait::async_trait;
use gd_catalog::resource::ResourceLoader;
use gd_catalog::{CatalogError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Where catalog resources live: a web root or a local directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Http(String),
    Dir(PathBuf),
}

impl Source {
    pub(crate) fn parse(base: &str) -> Self {
        let base = base.trim();
        if is_absolute_url(base) {
            Source::Http(base.trim_end_matches('/').to_owned())
        } else {
            Source::Dir(PathBuf::from(base))
        }
    }
}

pub(crate) struct SourceLoader {
    source: Source,
    http: reqwest::Client,
}

impl SourceLoader {
    pub(crate) fn new(source: Source) -> Self {
        Self {
            source,
            http: reqwest::Client::new(),
        }
    }

    /// Join a manifest path such as `./src/bi/demo.html` onto the base.
    pub(crate) fn resolve(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_owned();
        }
        let relative = path.trim_start_matches("./").trim_start_matches('/');
        match &self.source {
            Source::Http(base) => format!("{base}/{relative}"),
            Source::Dir(dir) => dir.join(relative).to_string_lossy().into_owned(),
        }
    }

    fn is_remote(&self, resolved: &str) -> bool {
        matches!(self.source, Source::Http(_)) || is_absolute_url(resolved)
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[async_trait(?Send)]
impl ResourceLoader for SourceLoader {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let resolved = self.resolve(url);
        debug!("fetching {}", resolved);

        if !self.is_remote(&resolved) {
            return tokio::fs::read_to_string(&resolved)
                .await
                .map_err(|err| CatalogError::resource_load(url, err));
        }

        let response = self
            .http
            .get(&resolved)
            .send()
            .await
            .map_err(|err| CatalogError::resource_load(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::resource_load(url, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|err| CatalogError::resource_load(url, err))
    }

    async fn exists(&self, url: &str) -> bool {
        let resolved = self.resolve(url);

        if !self.is_remote(&resolved) {
            return tokio::fs::metadata(&resolved)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
        }

        match self.http.head(&resolved).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("HEAD {} failed: {}", resolved, err);
                false
            }
        }
    }
}
