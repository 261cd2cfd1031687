use thiserror::Error;

/// Every failure the catalog can report. None of them are fatal: callers turn
/// them into a [`crate::Notice`] and keep their previous state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to load {url}: {reason}")]
    ResourceLoad { url: String, reason: String },

    #[error("Icon group not found: {0}")]
    GroupNotFound(String),

    #[error("Icon not found: {0}")]
    IconNotFound(String),

    #[error("{0} is coming soon")]
    ComingSoon(String),

    #[error("Download not available for {0}")]
    DownloadUnavailable(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Invalid icon group config: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub fn resource_load(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::ResourceLoad {
            url: url.to_owned(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
