//! Lifetime-scoped cancellation for in-flight requests.
//!
//! A view creates one `CancelToken` with `CancelToken::for_owner()`; the
//! token is cancelled when the owning reactive scope is cleaned up. Created
//! inside an `Effect`, it is also cancelled when that effect re-runs. Async
//! tasks check `is_cancelled()` after every await before touching signals.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled when the current reactive owner is disposed.
    pub fn for_owner() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
