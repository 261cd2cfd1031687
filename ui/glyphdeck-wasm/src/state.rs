//! Global application state.
//!
//! The catalog session lives in a `RefCell`-wrapped `thread_local!` (WASM is
//! single-threaded). Never hold a borrow across an `.await`: async flows
//! take what they need out of the session, await, then come back through
//! `with_mut`.

use gd_catalog::CatalogSession;
use std::cell::RefCell;

thread_local! {
    static SESSION: RefCell<CatalogSession> = RefCell::new(CatalogSession::default());
}

/// Run a closure with shared read access to the session.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&CatalogSession) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the session.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut CatalogSession) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

pub fn replace(session: CatalogSession) {
    with_mut(|s| *s = session);
}
