//! Command-line surface and resolved runtime configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockroom_infra::DEFAULT_STOCK_FILE;
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_observability::LogFormat;

/// Environment variable holding the default low-stock threshold.
pub const LOW_THRESHOLD_ENV: &str = "STOCKROOM_LOW_THRESHOLD";

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Track item quantities in a JSON stock file")]
pub struct Cli {
    /// Stock file to load and save.
    #[arg(long, global = true, env = "STOCKROOM_FILE", default_value = DEFAULT_STOCK_FILE)]
    pub file: PathBuf,

    /// Log output format on stderr (`text` or `json`).
    #[arg(long, global = true, env = "STOCKROOM_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the demonstration flow (default).
    Demo,
    /// Add a quantity of an item (negative quantities lower the total).
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove a quantity of an item; items reaching zero are dropped.
    ///
    /// Negative quantities are rejected.
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Show the on-hand quantity of an item.
    Qty { item: String },
    /// List items below the low-stock threshold.
    Low {
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i64>,
    },
    /// Print every item and its quantity.
    Report,
}

/// Settings the commands run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub file: PathBuf,
    pub low_threshold: i64,
}

impl AppConfig {
    /// Resolve from parsed flags plus the environment.
    ///
    /// Call after logging is initialized so bad environment values are reported.
    pub fn resolve(cli: &Cli) -> Self {
        Self {
            file: cli.file.clone(),
            low_threshold: parse_threshold(std::env::var(LOW_THRESHOLD_ENV).ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_STOCK_FILE),
            low_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Low-stock threshold from a raw environment value, falling back to the default.
pub fn parse_threshold(raw: Option<String>) -> i64 {
    match raw {
        None => DEFAULT_LOW_STOCK_THRESHOLD,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = %raw,
                default = DEFAULT_LOW_STOCK_THRESHOLD,
                "{LOW_THRESHOLD_ENV} is not an integer; using default"
            );
            DEFAULT_LOW_STOCK_THRESHOLD
        }),
    }
}
