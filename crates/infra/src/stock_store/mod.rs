//! Stock persistence boundary.
//!
//! A repository holds one stock snapshot. The JSON file repository is what the
//! CLI uses; the in-memory one backs tests.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_STOCK_FILE, JsonFileRepository};
pub use r#trait::{PersistenceError, StockRepository, decode_stock, encode_stock};
