//! Transient user-facing messages (toasts).

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<CatalogError> for Notice {
    fn from(err: CatalogError) -> Self {
        Notice::error(err.to_string())
    }
}

/// What a copy-to-clipboard action wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    ClassName,
    BasicHtml,
    Code,
}

impl CopyKind {
    pub fn copied(self, text: &str) -> Notice {
        match self {
            CopyKind::ClassName => Notice::info(format!("Copied class: {text}")),
            CopyKind::BasicHtml => Notice::info("Basic HTML copied to clipboard!"),
            CopyKind::Code => Notice::info("Code copied to clipboard!"),
        }
    }

    pub fn failed(self) -> Notice {
        match self {
            CopyKind::ClassName => Notice::error("Failed to copy class name"),
            CopyKind::BasicHtml => Notice::error("Failed to copy HTML"),
            CopyKind::Code => Notice::error("Failed to copy code"),
        }
    }
}
