//! HTTP collaborator for Finchboard.
//!
//! Wraps the remote finance API behind typed fetchers: raw responses are
//! validated and normalized at this boundary so `finchboard-core` only ever
//! sees total records. Also home to the authenticated CSV export pipeline
//! and the last-request-wins fetch sequencing used by view models.

pub mod client;
pub mod export;
pub mod resources;
pub mod sequence;

pub use client::ApiClient;
pub use export::{ExportError, ExportFilters, ExportKind, ExportState, Exporter, SavedExport};
pub use sequence::{FetchTicket, ViewSlot};
