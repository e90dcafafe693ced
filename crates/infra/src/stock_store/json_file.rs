use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use stockroom_inventory::Stock;

use super::r#trait::{PersistenceError, StockRepository, decode_stock, encode_stock};

/// Stock file used when no path is given.
pub const DEFAULT_STOCK_FILE: &str = "inventory.json";

/// Stock snapshot kept in a UTF-8 JSON file.
///
/// Each call opens the file, does its work and drops the handle before
/// returning, on success and failure alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            location: self.location(),
            source,
        }
    }

    fn write_file(&self, bytes: &[u8]) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        out.write_all(bytes)?;
        out.flush()
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_FILE)
    }
}

impl StockRepository for JsonFileRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn save(&self, stock: &Stock) -> Result<(), PersistenceError> {
        let result = encode_stock(stock)
            .and_then(|bytes| self.write_file(&bytes).map_err(|e| self.io_error(e)));

        match &result {
            Ok(()) => tracing::info!(path = %self.path.display(), items = stock.len(), "saved stock"),
            Err(err) => tracing::error!(path = %self.path.display(), error = %err, "Error saving inventory"),
        }
        result
    }

    fn try_load(&self) -> Result<Stock, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound(self.location()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let stock = decode_stock(&text, &self.location())?;
        tracing::info!(path = %self.path.display(), items = stock.len(), "loaded stock");
        Ok(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_inventory::ActivityLog;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> JsonFileRepository {
        JsonFileRepository::new(dir.path().join(DEFAULT_STOCK_FILE))
    }

    #[test]
    fn default_path_is_inventory_json() {
        assert_eq!(JsonFileRepository::default().path(), Path::new("inventory.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let mut stock = Stock::new();
        let mut log = ActivityLog::new();
        stock.add("apple", 7, &mut log).unwrap();

        repo.save(&stock).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7\n}");
        assert_eq!(repo.load(), stock);
    }

    #[test]
    fn whitespace_name_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        let mut stock = Stock::new();
        stock.add(" ", 2, &mut ActivityLog::new()).unwrap();
        repo.save(&stock).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded, stock);
        assert_eq!(loaded.quantity_of(" "), 2);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        assert!(matches!(repo.try_load(), Err(PersistenceError::NotFound(_))));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        fs::write(repo.path(), "{ this is not json").unwrap();

        assert!(matches!(repo.try_load(), Err(PersistenceError::Corrupt { .. })));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn save_into_missing_directory_reports_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("no-such-dir").join("stock.json"));

        let err = repo.save(&Stock::new()).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        let mut log = ActivityLog::new();

        let mut stock = Stock::new();
        stock.add("apple", 10, &mut log).unwrap();
        stock.add("banana", 4, &mut log).unwrap();
        repo.save(&stock).unwrap();

        stock.remove("banana", 4).unwrap();
        repo.save(&stock).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.quantity_of("apple"), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: loading what was saved reproduces the stock.
        #[test]
        fn load_reproduces_saved_stock(
            entries in prop::collection::btree_map("[A-Za-z][A-Za-z0-9 _-]{0,19}", 0i64..1_000_000, 0..20)
        ) {
            let dir = TempDir::new().unwrap();
            let repo = repo_in(&dir);

            let mut stock = Stock::new();
            let mut log = ActivityLog::new();
            for (item, qty) in &entries {
                stock.add(item, *qty, &mut log).unwrap();
            }

            repo.save(&stock).unwrap();
            prop_assert_eq!(repo.try_load().unwrap(), stock);
        }
    }
}
