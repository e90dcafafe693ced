//! Demonstration flow: a fixed run through every stock operation.
//!
//! Nothing in here aborts the run. Rejected input and persistence failures are
//! logged and the flow moves on to the next step.

use std::io::Write;

use serde_json::{Value as JsonValue, json};

use stockroom_infra::StockRepository;
use stockroom_inventory::{ActivityLog, LowStockReport, Stock, write_report};

use crate::commands::{Status, report_domain_error};

pub fn run<R, W>(repo: &R, low_threshold: i64, out: &mut W) -> anyhow::Result<Status>
where
    R: StockRepository,
    W: Write,
{
    let mut stock = Stock::new();
    let mut log = ActivityLog::new();

    // The last pair is deliberately ill-typed.
    let adds: [(JsonValue, JsonValue); 3] = [
        (json!("apple"), json!(10)),
        (json!("banana"), json!(-2)),
        (json!(123), json!("ten")),
    ];
    for (item, qty) in &adds {
        if let Err(err) = stock.add_value(item, qty, &mut log) {
            report_domain_error(&err);
            break;
        }
    }

    for (item, qty) in [("apple", 3), ("orange", 1)] {
        if let Err(err) = stock.remove(item, qty) {
            report_domain_error(&err);
        }
    }

    writeln!(out, "Apple stock: {}", stock.quantity_of("apple"))?;
    writeln!(out, "{}", LowStockReport::new(&stock, low_threshold))?;

    if let Err(err) = repo.save(&stock) {
        tracing::warn!(error = %err, "continuing without a saved stock");
    }
    let stock = repo.load();
    write_report(&stock, &mut *out)?;

    for entry in &log {
        tracing::debug!("{entry}");
    }
    tracing::info!(adds = log.len(), items = stock.len(), "demo finished");

    Ok(Status::Success)
}
