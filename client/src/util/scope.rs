//! Per-view request scope: an abort signal plus a liveness flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages install one scope on mount. Every request the page issues carries the
//! scope's abort signal, and every completion checks `is_alive()` before it
//! touches page state. Unmounting aborts in-flight requests, so a slow
//! response can no longer land on a view the user has left.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos::prelude::{LocalStorage, StoredValue, WithValue};

/// Lifetime of one mounted view.
#[derive(Clone)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    controller: StoredValue<Option<web_sys::AbortController>, LocalStorage>,
}

impl ViewScope {
    /// Scope that only closes when `close()` is called.
    pub fn detached() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            #[cfg(feature = "hydrate")]
            controller: StoredValue::new_local(web_sys::AbortController::new().ok()),
        }
    }

    /// Scope bound to the current reactive owner; closes on cleanup.
    pub fn install() -> Self {
        let scope = Self::detached();
        let on_close = scope.clone();
        leptos::prelude::on_cleanup(move || on_close.close());
        scope
    }

    /// Mark the view gone and abort outstanding requests.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
        #[cfg(feature = "hydrate")]
        self.controller.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Signal to attach to outgoing requests.
    #[cfg(feature = "hydrate")]
    pub fn abort_signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller
            .try_with_value(|controller| controller.as_ref().map(web_sys::AbortController::signal))
            .flatten()
    }
}

impl std::fmt::Debug for ViewScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewScope").field("alive", &self.is_alive()).finish()
    }
}

/// Monotonic request generation for "latest request wins" guards.
///
/// Each load takes a ticket; a completion is applied only if no newer load
/// has started since.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new load and return its ticket.
    pub fn advance(&mut self) -> Generation {
        self.0 += 1;
        *self
    }

    pub fn is_current(self, ticket: Generation) -> bool {
        self == ticket
    }
}
