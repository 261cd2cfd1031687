//! Toast notifications.
//!
//! One toast at a time. Showing a new one drops the pending hide timer, so
//! the latest message always gets its full display time.

use crate::dom::{self, Elements};
use gd_catalog::Notice;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

thread_local! {
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

pub fn show(els: &Elements, notice: &Notice) {
    if notice.is_error() {
        gloo_console::warn!(notice.message.clone());
    }

    let toast = els.toast.clone();
    dom::set_text(&toast, &notice.message);
    dom::toggle_class(&toast, "error", notice.is_error());
    dom::add_class(&toast, "show");

    let millis = crate::state::with(|s| s.config().toast_duration_ms);
    let timer = Timeout::new(millis, move || {
        dom::remove_class(&toast, "show");
    });

    // Replacing the old Timeout cancels it on drop.
    HIDE_TIMER.with(|t| *t.borrow_mut() = Some(timer));
}

pub fn show_opt(els: &Elements, notice: Option<&Notice>) {
    if let Some(notice) = notice {
        show(els, notice);
    }
}
