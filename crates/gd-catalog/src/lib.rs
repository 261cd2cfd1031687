//! Icon catalog core: group manifest, selection state machine, search,
//! snippet generation and the view projection rendered by the frontends.
//!
//! Nothing in here touches the DOM or the network directly. IO goes through
//! the [`resource::ResourceLoader`] and [`resource::StylesheetHost`] traits.

pub mod catalog;
pub mod config;
pub mod error;
pub mod groups;
pub mod notice;
pub mod resource;
pub mod session;
pub mod snippet;
pub mod state;
pub mod style;
pub mod view;

pub use catalog::{IconCatalog, filter_icons};
pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use gd_api_types::{IconGroup, IconGroupsConfig};
pub use groups::GroupCatalog;
pub use notice::{CopyKind, Notice, NoticeKind};
pub use session::CatalogSession;
pub use state::{CatalogState, LoadTicket, Phase, SnippetTab};
pub use style::{StyleCommand, StyleOptions};
