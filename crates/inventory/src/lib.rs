//! Inventory domain module.
//!
//! Stock mutation, the per-run activity log and reporting, implemented as
//! deterministic domain logic (no file IO).

pub mod activity;
pub mod report;
pub mod stock;

pub use activity::{ActivityLog, LogEntry};
pub use report::{LowStockReport, StockReport, print_report, write_report};
pub use stock::{DEFAULT_LOW_STOCK_THRESHOLD, Removal, Stock};
