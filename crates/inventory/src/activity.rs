//! Per-run activity log of add operations.
//!
//! The log is owned by the caller and passed into each `add` explicitly, so
//! accumulating across calls or starting fresh is the caller's choice. It is
//! never persisted.

use core::fmt;

use chrono::{DateTime, Utc};
use stockroom_core::ItemName;

/// One recorded add operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub occurred_at: DateTime<Utc>,
    pub item: ItemName,
    pub qty: i64,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Added {} of {}", self.occurred_at, self.qty, self.item)
    }
}

/// Append-only sequence of [`LogEntry`] values, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_add(&mut self, occurred_at: DateTime<Utc>, item: ItemName, qty: i64) {
        self.entries.push(LogEntry {
            occurred_at,
            item,
            qty,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines, one per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a LogEntry;
    type IntoIter = core::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = ActivityLog::new();
        log.record_add(at(0), ItemName::new("apple").unwrap(), 10);
        log.record_add(at(1), ItemName::new("banana").unwrap(), -2);

        let items: Vec<_> = log.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["apple", "banana"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn entry_renders_timestamp_qty_and_item() {
        let mut log = ActivityLog::new();
        log.record_add(at(0), ItemName::new("apple").unwrap(), 10);

        assert_eq!(log.lines(), vec!["2023-11-14 22:13:20 UTC: Added 10 of apple".to_string()]);
    }
}
