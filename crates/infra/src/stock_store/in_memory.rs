use std::sync::{PoisonError, RwLock};

use stockroom_inventory::Stock;

use super::r#trait::{PersistenceError, StockRepository, decode_stock, encode_stock};

const LOCATION: &str = "<memory>";

/// In-memory stock snapshot.
///
/// Keeps the same encoded text a file would hold, so the JSON round trip is
/// exercised. Intended for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    contents: RwLock<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw snapshot text (which need not be valid).
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(text.into())),
        }
    }

    /// The last saved snapshot text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StockRepository for InMemoryRepository {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn save(&self, stock: &Stock) -> Result<(), PersistenceError> {
        let bytes = encode_stock(stock)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        // Snapshots are replaced whole; a poisoned lock still holds a complete one.
        *self.contents.write().unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }

    fn try_load(&self) -> Result<Stock, PersistenceError> {
        match self.contents() {
            Some(text) => decode_stock(&text, LOCATION),
            None => Err(PersistenceError::NotFound(LOCATION.to_string())),
        }
    }
}
