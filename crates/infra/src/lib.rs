//! Infrastructure layer: stock persistence.

pub mod stock_store;

pub use stock_store::{
    DEFAULT_STOCK_FILE, InMemoryRepository, JsonFileRepository, PersistenceError, StockRepository,
};
