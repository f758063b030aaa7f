//! Single-slot in-flight guard for export controls.

use std::sync::Mutex;

/// Lifecycle of one export control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    /// No export has run yet, or the last one was acknowledged.
    Idle,
    /// An export is currently running.
    InFlight,
    /// The last export completed successfully.
    Done,
    /// The last export failed.
    Failed,
}

/// Admits at most one in-flight export.
///
/// A second begin attempt while one permit is outstanding returns `None`;
/// callers treat that as a no-op, not a queued retry.
#[derive(Debug)]
pub struct ExportGuard {
    state: Mutex<ExportState>,
}

impl Default for ExportGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportGuard {
    /// Creates an idle guard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ExportState::Idle),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ExportState {
        *self.lock()
    }

    /// Takes the single slot, or returns `None` if an export is in flight.
    pub fn try_begin(&self) -> Option<ExportPermit<'_>> {
        let mut state = self.lock();
        if *state == ExportState::InFlight {
            return None;
        }
        *state = ExportState::InFlight;
        Some(ExportPermit {
            guard: self,
            settled: false,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ExportState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn settle(&self, state: ExportState) {
        *self.lock() = state;
    }
}

/// Ownership of the guard's single slot for the duration of one export.
///
/// The slot is released exactly once: explicitly via [`complete`] or
/// [`fail`], or on drop (as `Failed`) if the export unwound before
/// settling.
///
/// [`complete`]: ExportPermit::complete
/// [`fail`]: ExportPermit::fail
#[derive(Debug)]
pub struct ExportPermit<'a> {
    guard: &'a ExportGuard,
    settled: bool,
}

impl ExportPermit<'_> {
    /// Marks the export successful and releases the slot.
    pub fn complete(mut self) {
        self.guard.settle(ExportState::Done);
        self.settled = true;
    }

    /// Marks the export failed and releases the slot.
    pub fn fail(mut self) {
        self.guard.settle(ExportState::Failed);
        self.settled = true;
    }
}

impl Drop for ExportPermit<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.guard.settle(ExportState::Failed);
        }
    }
}
