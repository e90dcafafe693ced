use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use stockroom_core::{ItemName, quantity_from_value};
use stockroom_inventory::Stock;

/// Stock persistence error.
///
/// These are **infrastructure errors** (filesystem, encoding) as opposed to
/// domain errors raised by stock operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Nothing has been saved at this location yet.
    #[error("no saved stock at {0}")]
    NotFound(String),

    #[error("i/o error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The saved content is not a JSON object.
    #[error("corrupt stock data at {location}: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode stock: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Storage boundary for a single stock snapshot.
///
/// `save` always surfaces failures to the caller. `load` never fails: a missing
/// or unreadable snapshot degrades to an empty stock, while `try_load` keeps
/// the reason for callers that need to tell the cases apart.
pub trait StockRepository {
    /// Where snapshots go; used in log lines.
    fn location(&self) -> String;

    fn save(&self, stock: &Stock) -> Result<(), PersistenceError>;

    fn try_load(&self) -> Result<Stock, PersistenceError>;

    fn load(&self) -> Stock {
        match self.try_load() {
            Ok(stock) => stock,
            Err(PersistenceError::NotFound(location)) => {
                tracing::debug!(%location, "no saved stock, starting empty");
                Stock::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load stock, starting empty");
                Stock::new()
            }
        }
    }
}

impl<R> StockRepository for &R
where
    R: StockRepository + ?Sized,
{
    fn location(&self) -> String {
        (**self).location()
    }

    fn save(&self, stock: &Stock) -> Result<(), PersistenceError> {
        (**self).save(stock)
    }

    fn try_load(&self) -> Result<Stock, PersistenceError> {
        (**self).try_load()
    }
}

/// JSON object text with 4-space indentation.
pub fn encode_stock(stock: &Stock) -> Result<Vec<u8>, PersistenceError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    stock
        .serialize(&mut ser)
        .map_err(PersistenceError::Serialize)?;
    Ok(buf)
}

/// Decode a JSON object of item name to quantity.
///
/// Only text that is not a JSON object is `Corrupt`. Inside the object each
/// entry stands alone: an empty name or a quantity that is not an integer is
/// skipped with a warning and every other entry is kept.
pub fn decode_stock(text: &str, location: &str) -> Result<Stock, PersistenceError> {
    let entries: serde_json::Map<String, JsonValue> =
        serde_json::from_str(text).map_err(|source| PersistenceError::Corrupt {
            location: location.to_string(),
            source,
        })?;

    let stock = entries
        .into_iter()
        .filter_map(|(key, value)| match (ItemName::new(key.as_str()), quantity_from_value(&value)) {
            (Ok(name), Ok(qty)) => Some((name, qty)),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(%location, item = %key, %value, error = %err, "skipping stock entry");
                None
            }
        })
        .collect();
    Ok(stock)
}
