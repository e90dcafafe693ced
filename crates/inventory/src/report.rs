//! Human-readable stock listings.

use core::fmt;
use std::io::{self, Write};

use crate::stock::Stock;

/// Full listing: an `Items Report:` header, then `<item> -> <qty>` per line.
#[derive(Debug, Copy, Clone)]
pub struct StockReport<'a>(pub &'a Stock);

impl fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items Report:")?;
        for (item, qty) in self.0.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}

/// One-line summary of the items below a threshold.
#[derive(Debug, Clone)]
pub struct LowStockReport<'a> {
    pub items: Vec<&'a str>,
}

impl<'a> LowStockReport<'a> {
    pub fn new(stock: &'a Stock, threshold: i64) -> Self {
        Self {
            items: stock.low_stock(threshold),
        }
    }
}

impl fmt::Display for LowStockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Low items: [{}]", self.items.join(", "))
    }
}

pub fn write_report<W: Write>(stock: &Stock, mut out: W) -> io::Result<()> {
    write!(out, "{}", StockReport(stock))?;
    out.flush()
}

/// Print the full listing to stdout.
pub fn print_report(stock: &Stock) -> io::Result<()> {
    write_report(stock, io::stdout().lock())
}
