//! Authenticated CSV export pipeline.
//!
//! Streams server-held data to a local file: credential check, filter
//! serialization, bearer-authenticated fetch, filename negotiation, save.
//! A single-slot guard keeps each export control to one in-flight run.

pub mod filters;
pub mod guard;
pub mod pipeline;

pub use filters::ExportFilters;
pub use guard::{ExportGuard, ExportPermit, ExportState};
pub use pipeline::{
    ExportError, ExportKind, ExportPayload, ExportTransport, Exporter, HttpTransport, SavedExport,
};
