//! JSON-backed inventory persistence.
//!
//! The whole inventory lives in one pretty-printed JSON file:
//! `{ "<code>": { "title": "...", "des": "..." }, ... }`.
//! - Every mutation rewrites the file in full; there is no journal.
//! - A missing or unreadable file loads as an empty inventory.
//! - A failed save leaves the in-memory inventory as it is; the next
//!   successful save brings the file back in line.

use crate::error::{InventoryError, Result};
use crate::models::{ImportSummary, Inventory, Record};
use std::path::{Path, PathBuf};

/// Parses inventory JSON, rejecting anything that is not a map of code to {title, des}
pub fn parse_inventory(bytes: &[u8]) -> Result<Inventory> {
    serde_json::from_slice(bytes).map_err(InventoryError::Format)
}

/// Serializes the inventory exactly as it is written to disk
pub fn to_json_bytes(inventory: &Inventory) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(inventory).map_err(InventoryError::Serialize)
}

/// Load the inventory from disk, or start empty if the file is missing or corrupt
pub fn load(path: &Path) -> Inventory {
    if path.exists() {
        match std::fs::read(path) {
            Ok(bytes) => match parse_inventory(&bytes) {
                Ok(inventory) => {
                    log::info!("Loaded inventory with {} records", inventory.len());
                    return inventory;
                }
                Err(e) => {
                    log::warn!("Failed to parse inventory file, starting fresh: {}", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read inventory file, starting fresh: {}", e);
            }
        }
    }
    log::info!("Starting with empty inventory");
    Inventory::new()
}

/// Overwrite the inventory file with the full inventory
pub fn save(path: &Path, inventory: &Inventory) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = to_json_bytes(inventory)?;
    std::fs::write(path, content)?;

    log::debug!("Saved inventory with {} records", inventory.len());
    Ok(())
}

/// Returns `inventory` with every entry of `imported` applied on top.
///
/// Collisions are resolved per code in favour of `imported`; codes only in
/// `inventory` are kept.
pub fn merge(inventory: &Inventory, imported: &Inventory) -> Inventory {
    let mut merged = inventory.clone();
    merged.extend(
        imported
            .iter()
            .map(|(code, record)| (code.clone(), record.clone())),
    );
    merged
}

/// The single owner of the in-memory inventory and its file
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    inventory: Inventory,
}

impl InventoryStore {
    /// Opens the store at `path`, loading whatever is there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        log::info!("Inventory file: {}", path.display());
        let inventory = load(&path);
        Self { path, inventory }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn get(&self, code: &str) -> Option<&Record> {
        self.inventory.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.inventory.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// All records, sorted by code
    pub fn records(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.inventory
            .iter()
            .map(|(code, record)| (code.as_str(), record))
    }

    /// Write the current inventory to disk
    pub fn save(&self) -> Result<()> {
        save(&self.path, &self.inventory)
    }

    /// Insert or replace the record for `code`, then persist
    pub fn insert(&mut self, code: &str, record: Record) -> Result<()> {
        self.inventory.insert(code.to_string(), record);
        log::info!("Stored record for code {}", code);
        self.save()
    }

    /// Remove the record for `code` and persist.
    ///
    /// Unknown codes are a no-op and nothing is written. On a save error the
    /// record is already gone from memory.
    pub fn delete(&mut self, code: &str) -> Result<Option<Record>> {
        match self.inventory.remove(code) {
            Some(record) => {
                log::info!("Deleted record for code {}", code);
                self.save()?;
                Ok(Some(record))
            }
            None => {
                log::debug!("Delete ignored, no record for code {}", code);
                Ok(None)
            }
        }
    }

    /// Merge an imported inventory file into this one and persist.
    ///
    /// Bytes that do not parse as an inventory leave the store untouched.
    /// Imported records are not checked for empty fields.
    pub fn import(&mut self, bytes: &[u8]) -> Result<ImportSummary> {
        let imported = parse_inventory(bytes)?;

        let mut summary = ImportSummary::default();
        for code in imported.keys() {
            if self.inventory.contains_key(code) {
                summary.replaced += 1;
            } else {
                summary.added += 1;
            }
        }

        self.inventory = merge(&self.inventory, &imported);
        log::info!(
            "Imported {} records: {} added, {} replaced",
            summary.total(),
            summary.added,
            summary.replaced
        );
        self.save()?;
        Ok(summary)
    }

    /// The inventory as JSON, byte-for-byte what `save` writes
    pub fn export(&self) -> Result<Vec<u8>> {
        to_json_bytes(&self.inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, des: &str) -> Record {
        Record::new(title, des)
    }

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert("A".to_string(), record("Stapler", "Office use"));
        inventory.insert("B".to_string(), record("Kettle", "Kitchen"));
        inventory
    }

    fn data_file(dir: &TempDir) -> PathBuf {
        dir.path().join("scanData.json")
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&data_file(&dir)).is_empty());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        std::fs::write(&path, r#"{"A": "just a string"}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let inventory = sample();

        save(&path, &inventory).unwrap();
        assert_eq!(load(&path), inventory);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("scanData.json");

        save(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_writes_pretty_json_with_des_field() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        save(&path, &sample()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"des\""));
        assert!(!content.contains("\"description\""));
    }

    #[test]
    fn merge_with_itself_is_unchanged() {
        let inventory = sample();
        assert_eq!(merge(&inventory, &inventory), inventory);
    }

    #[test]
    fn merge_imported_value_wins() {
        let inventory = sample();
        let mut imported = Inventory::new();
        imported.insert("A".to_string(), record("Hole punch", "Desk"));

        let merged = merge(&inventory, &imported);
        assert_eq!(merged["A"], record("Hole punch", "Desk"));
        assert_eq!(merged["B"], inventory["B"]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_into_empty_is_imported() {
        let imported = sample();
        assert_eq!(merge(&Inventory::new(), &imported), imported);
    }

    #[test]
    fn parse_rejects_wrong_shapes() {
        let cases: [&[u8]; 7] = [
            b"",
            b"not json",
            b"[]",
            b"\"text\"",
            br#"{"A": ["Stapler", "Office use"]}"#,
            br#"{"A": {"title": "Stapler"}}"#,
            br#"{"A": {"title": 1, "des": "Office use"}}"#,
        ];
        for bytes in cases {
            let result = parse_inventory(bytes);
            assert!(
                matches!(result, Err(InventoryError::Format(_))),
                "expected format error for {:?}",
                String::from_utf8_lossy(bytes)
            );
        }
    }

    #[test]
    fn parse_accepts_empty_object() {
        assert!(parse_inventory(b"{}").unwrap().is_empty());
    }

    #[test]
    fn store_open_loads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        save(&path, &sample()).unwrap();

        let store = InventoryStore::open(&path);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("A"), Some(&record("Stapler", "Office use")));
        assert!(store.contains("B"));
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn store_insert_persists() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let mut store = InventoryStore::open(&path);

        store.insert("123", record("Stapler", "Office use")).unwrap();

        assert_eq!(load(&path), *store.inventory());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_records_are_sorted_by_code() {
        let dir = TempDir::new().unwrap();
        let mut store = InventoryStore::open(data_file(&dir));
        store.insert("zeta", record("Z", "z")).unwrap();
        store.insert("alpha", record("A", "a")).unwrap();
        store.insert("mid", record("M", "m")).unwrap();

        let codes: Vec<&str> = store.records().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn store_delete_removes_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        save(&path, &sample()).unwrap();
        let mut store = InventoryStore::open(&path);

        let removed = store.delete("A").unwrap();

        assert_eq!(removed, Some(record("Stapler", "Office use")));
        assert!(!store.contains("A"));
        assert_eq!(load(&path).keys().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn store_delete_absent_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let mut store = InventoryStore::open(&path);

        assert_eq!(store.delete("missing").unwrap(), None);
        assert!(store.is_empty());
        assert!(!path.exists(), "no-op delete must not write the file");
    }

    #[test]
    fn store_import_reports_added_and_replaced() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        save(&path, &sample()).unwrap();
        let mut store = InventoryStore::open(&path);

        let summary = store
            .import(br#"{"B": {"title": "X", "des": "Y"}, "C": {"title": "Mug", "des": "Tea"}}"#)
            .unwrap();

        assert_eq!(summary, ImportSummary { added: 1, replaced: 1 });
        assert_eq!(store.get("A"), Some(&record("Stapler", "Office use")));
        assert_eq!(store.get("B"), Some(&record("X", "Y")));
        assert_eq!(store.get("C"), Some(&record("Mug", "Tea")));
        assert_eq!(load(&path), *store.inventory());
    }

    #[test]
    fn store_import_accepts_empty_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = InventoryStore::open(data_file(&dir));

        store.import(br#"{"A": {"title": "", "des": ""}}"#).unwrap();
        assert_eq!(store.get("A"), Some(&record("", "")));
    }

    #[test]
    fn store_import_bad_bytes_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        save(&path, &sample()).unwrap();
        let before = std::fs::read(&path).unwrap();
        let mut store = InventoryStore::open(&path);

        let result = store.import(br#"{"B": {"title": "X"}}"#);

        assert!(matches!(result, Err(InventoryError::Format(_))));
        assert_eq!(*store.inventory(), sample());
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn store_export_matches_file() {
        let dir = TempDir::new().unwrap();
        let path = data_file(&dir);
        let mut store = InventoryStore::open(&path);
        store.insert("A", record("Stapler", "Office use")).unwrap();

        assert_eq!(store.export().unwrap(), std::fs::read(&path).unwrap());
    }

    #[test]
    fn store_save_failure_keeps_memory_state() {
        let dir = TempDir::new().unwrap();
        // The data file path is a directory, so every write fails
        let mut store = InventoryStore::open(dir.path());

        let result = store.insert("A", record("Stapler", "Office use"));

        assert!(matches!(result, Err(InventoryError::Io(_))));
        assert_eq!(store.get("A"), Some(&record("Stapler", "Office use")));
    }
}
