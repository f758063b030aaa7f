//! Normalized invoice and revenue records.

pub mod types;

pub use types::{Invoice, InvoiceMetrics, MonthlyRevenue, TopCustomer};
