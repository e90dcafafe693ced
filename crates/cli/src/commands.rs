//! One-shot stock commands.
//!
//! Each command loads the snapshot, applies one operation, writes its output
//! and saves only when the stock changed.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, quantity_from_str};
use stockroom_infra::StockRepository;
use stockroom_inventory::{ActivityLog, LowStockReport, Removal, write_report};

use crate::config::{AppConfig, Command};
use crate::demo;

/// How a command ended when no persistence failure occurred.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Input was rejected with `InvalidArgument`.
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Rejected => ExitCode::from(2),
        }
    }
}

/// Command-line quantities enter the loosely typed path: an integer becomes a
/// JSON number, anything else stays a string and is rejected downstream.
pub fn loose_qty(raw: &str) -> JsonValue {
    quantity_from_str(raw)
        .map(JsonValue::from)
        .unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

/// Log a domain error the way the console expects and map it to a status.
pub fn report_domain_error(err: &DomainError) -> Status {
    match err {
        DomainError::NotFound(item) => {
            tracing::warn!("Warning: Tried to remove non-existent item '{item}'");
            Status::Success
        }
        DomainError::InvalidArgument(_) => {
            tracing::warn!("Input error: {err}");
            Status::Rejected
        }
    }
}

pub fn execute<R, W>(command: &Command, config: &AppConfig, repo: &R, out: &mut W) -> anyhow::Result<Status>
where
    R: StockRepository,
    W: Write,
{
    match command {
        Command::Demo => demo::run(repo, config.low_threshold, out),
        Command::Add { item, qty } => add(repo, item, qty, out),
        Command::Remove { item, qty } => remove(repo, item, qty, out),
        Command::Qty { item } => {
            let stock = repo.load();
            writeln!(out, "{item} stock: {}", stock.quantity_of(item))?;
            Ok(Status::Success)
        }
        Command::Low { threshold } => {
            let stock = repo.load();
            let threshold = threshold.unwrap_or(config.low_threshold);
            writeln!(out, "{}", LowStockReport::new(&stock, threshold))?;
            Ok(Status::Success)
        }
        Command::Report => {
            let stock = repo.load();
            write_report(&stock, out).context("failed to write report")?;
            Ok(Status::Success)
        }
    }
}

fn add<R: StockRepository, W: Write>(repo: &R, item: &str, qty: &str, out: &mut W) -> anyhow::Result<Status> {
    let mut stock = repo.load();
    let mut log = ActivityLog::new();

    match stock.add_value(&JsonValue::from(item), &loose_qty(qty), &mut log) {
        Ok(quantity) => {
            for entry in &log {
                tracing::info!("{entry}");
            }
            repo.save(&stock)
                .with_context(|| format!("failed to save stock to {}", repo.location()))?;
            writeln!(out, "{item} -> {quantity}")?;
            Ok(Status::Success)
        }
        Err(err) => Ok(report_domain_error(&err)),
    }
}

fn remove<R: StockRepository, W: Write>(repo: &R, item: &str, qty: &str, out: &mut W) -> anyhow::Result<Status> {
    let mut stock = repo.load();

    match stock.remove_value(item, &loose_qty(qty)) {
        Ok(removal) => {
            repo.save(&stock)
                .with_context(|| format!("failed to save stock to {}", repo.location()))?;
            match removal {
                Removal::Remaining(left) => writeln!(out, "{item} -> {left}")?,
                Removal::Depleted => writeln!(out, "{item} removed")?,
            }
            Ok(Status::Success)
        }
        Err(err) => Ok(report_domain_error(&err)),
    }
}
