//! Severity tier mapping for change events.

pub mod types;

pub use types::{ChangeEvent, Severity};
