//! `stockroom` command-line driver.

pub mod commands;
pub mod config;
pub mod demo;

pub use commands::{Status, execute};
pub use config::{AppConfig, Cli, Command};
