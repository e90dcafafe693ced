use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, ItemName, item_from_value, quantity_from_value};

use crate::activity::ActivityLog;

/// Items whose quantity is strictly below this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// On-hand quantity per item.
///
/// Iteration order is the item names' sort order. Quantities may sit at zero
/// or below after an `add` with a negative quantity; `remove` deletes any entry
/// it takes to zero or below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stock {
    items: BTreeMap<ItemName, i64>,
}

/// What a successful `remove` left behind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still stocked with this quantity.
    Remaining(i64),
    /// The quantity dropped to zero or below and the entry was deleted.
    Depleted,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `item`, creating the entry at 0 if absent.
    ///
    /// Negative quantities are accepted and lower the running total. Returns
    /// the new quantity.
    pub fn add(&mut self, item: &str, qty: i64, log: &mut ActivityLog) -> DomainResult<i64> {
        self.add_at(item, qty, log, Utc::now())
    }

    /// Same as [`Stock::add`], recording the log entry at `occurred_at`.
    pub fn add_at(
        &mut self,
        item: &str,
        qty: i64,
        log: &mut ActivityLog,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<i64> {
        let name = ItemName::new(item)?;
        self.apply_add(name, qty, log, occurred_at)
    }

    /// Add from loosely typed input: `item` must be a JSON string and `qty` a
    /// JSON integer, otherwise `InvalidArgument` and nothing changes.
    pub fn add_value(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
        log: &mut ActivityLog,
    ) -> DomainResult<i64> {
        let name = item_from_value(item)?;
        let qty = quantity_from_value(qty)?;
        self.apply_add(name, qty, log, Utc::now())
    }

    fn apply_add(
        &mut self,
        name: ItemName,
        qty: i64,
        log: &mut ActivityLog,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<i64> {
        let current = self.quantity_of(name.as_str());
        let updated = current.checked_add(qty).ok_or_else(|| {
            DomainError::invalid_argument(format!("adding {qty} to '{name}' overflows its quantity"))
        })?;

        tracing::debug!(item = %name, qty, quantity = updated, "added stock");
        log.record_add(occurred_at, name.clone(), qty);
        self.items.insert(name, updated);
        Ok(updated)
    }

    /// Take `qty` of `item` out of stock.
    ///
    /// - absent item: `NotFound`, stock unchanged
    /// - negative `qty`: `InvalidArgument`, stock unchanged
    /// - otherwise the entry is decremented and deleted once it reaches zero or below
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        let Some(current) = self.items.get(item).copied() else {
            return Err(DomainError::not_found(item));
        };
        if qty < 0 {
            return Err(DomainError::invalid_argument(format!(
                "qty to remove must not be negative, got {qty}"
            )));
        }

        let remaining = current.saturating_sub(qty);
        if remaining <= 0 {
            self.items.remove(item);
            tracing::debug!(item, qty, "removed stock; item depleted");
            Ok(Removal::Depleted)
        } else {
            if let Some(slot) = self.items.get_mut(item) {
                *slot = remaining;
            }
            tracing::debug!(item, qty, quantity = remaining, "removed stock");
            Ok(Removal::Remaining(remaining))
        }
    }

    /// Remove with a loosely typed quantity. The item is checked first, so an
    /// absent item reports `NotFound` whatever `qty` holds.
    pub fn remove_value(&mut self, item: &str, qty: &JsonValue) -> DomainResult<Removal> {
        if !self.contains(item) {
            return Err(DomainError::not_found(item));
        }
        let qty = quantity_from_value(qty)?;
        self.remove(item, qty)
    }

    /// Current quantity of `item`; 0 when absent.
    pub fn quantity_of(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }
}

impl FromIterator<(ItemName, i64)> for Stock {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
