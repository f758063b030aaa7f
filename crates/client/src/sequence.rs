//! Last-request-wins fetch sequencing.
//!
//! A view model owns one [`ViewSlot`] per fetchable resource. Every fetch
//! takes a ticket before the request goes out; a completion is applied only
//! if its ticket is still the latest issued. Out-of-order completions from
//! superseded requests are discarded, never written.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Single-value store with last-request-wins semantics.
#[derive(Debug, Default)]
pub struct ViewSlot<T> {
    latest: AtomicU64,
    value: Mutex<Option<T>>,
}

impl<T> ViewSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
            value: Mutex::new(None),
        }
    }

    /// Issues a ticket for a new fetch, superseding all earlier tickets.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer fetch has been issued.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Applies a completed fetch. Returns false (and leaves the stored
    /// value untouched) when the ticket has been superseded.
    pub fn accept(&self, ticket: FetchTicket, value: T) -> bool {
        if !self.is_current(ticket) {
            tracing::trace!(ticket = ticket.0, "discarding stale fetch result");
            return false;
        }
        *self.lock() = Some(value);
        true
    }

    /// Invalidates all outstanding tickets and clears the stored value.
    /// Called on view teardown so pending completions are ignored.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        *self.lock() = None;
    }

    /// The most recently accepted value, if any.
    #[must_use]
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        self.value
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
