use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;
use crate::models::LicenseRecord;

/// Persists updated license records.
#[async_trait]
pub trait LicenseStore: Send + Sync {
    async fn save(&self, record: &LicenseRecord) -> Result<(), StoreError>;
}

/// Records loaded from a file are matched by their row in it, otherwise by
/// `id`. Records carrying neither never match.
fn same_record(a: &LicenseRecord, b: &LicenseRecord) -> bool {
    match (a.row, b.row) {
        (Some(x), Some(y)) => x == y,
        _ => matches!((&a.id, &b.id), (Some(x), Some(y)) if x == y),
    }
}

/// Read a JSON array of records, tagging each with its row.
pub async fn load_records(path: &Path) -> Result<Vec<LicenseRecord>, StoreError> {
    let content = tokio::fs::read_to_string(path).await?;
    let mut records: Vec<LicenseRecord> = serde_json::from_str(&content)?;
    for (row, record) in records.iter_mut().enumerate() {
        record.row = Some(row);
    }
    Ok(records)
}

/// Keeps records in a JSON array file, rewritten on every save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Mutex<Vec<LicenseRecord>>,
}

impl JsonFileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = load_records(&path).await?;
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn records(&self) -> Vec<LicenseRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl LicenseStore for JsonFileStore {
    async fn save(&self, record: &LicenseRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|r| same_record(r, record))
            .ok_or_else(|| StoreError::NotFound(record.to_string()))?;

        let mut next = records.clone();
        next[index] = record.clone();
        let json = serde_json::to_string_pretty(&next)?;
        tokio::fs::write(&self.path, json).await?;
        *records = next;
        debug!(record = %record, path = %self.path.display(), "record saved");
        Ok(())
    }
}

/// In-process store, mostly for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LicenseRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<LicenseRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl LicenseStore for MemoryStore {
    async fn save(&self, record: &LicenseRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        match records.iter_mut().find(|r| same_record(r, record)) {
            Some(slot) => *slot = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(id: &str, name: &str) -> LicenseRecord {
        LicenseRecord {
            id: Some(id.to_string()),
            language: Some("Ruby".to_string()),
            prod_key: Some("rails".to_string()),
            version: Some("7.0.0".to_string()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_json_store_updates_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        let initial = vec![record("1", "MIT License"), record("2", "TODO")];
        std::fs::write(&path, serde_json::to_string(&initial).unwrap()).unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let mut updated = record("1", "MIT");
        updated.spdx_id = Some("MIT".to_string());
        store.save(&updated).await.unwrap();

        let on_disk = load_records(&path).await.unwrap();
        assert_eq!(on_disk.len(), 2);
        assert_eq!(on_disk[0].spdx_id.as_deref(), Some("MIT"));
        assert_eq!(on_disk[1].name, "TODO");
    }

    #[tokio::test]
    async fn test_json_store_keeps_rows_without_id_apart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        let mut mit = record("x", "MIT");
        let mut apache = record("x", "Apache 2");
        mit.id = None;
        apache.id = None;
        std::fs::write(&path, serde_json::to_string(&vec![mit, apache]).unwrap()).unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let mut loaded = load_records(&path).await.unwrap();
        assert_eq!(loaded[0].row, Some(0));
        assert_eq!(loaded[1].row, Some(1));

        loaded[0].spdx_id = Some("MIT".to_string());
        loaded[1].name = "Apache-2.0".to_string();
        loaded[1].spdx_id = Some("Apache-2.0".to_string());
        store.save(&loaded[0]).await.unwrap();
        store.save(&loaded[1]).await.unwrap();

        let on_disk = load_records(&path).await.unwrap();
        assert_eq!(on_disk[0].name, "MIT");
        assert_eq!(on_disk[0].spdx_id.as_deref(), Some("MIT"));
        assert_eq!(on_disk[1].name, "Apache-2.0");
        assert_eq!(on_disk[1].spdx_id.as_deref(), Some("Apache-2.0"));
    }

    #[tokio::test]
    async fn test_record_without_row_or_id_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        let mut anonymous = record("x", "MIT");
        anonymous.id = None;
        std::fs::write(&path, serde_json::to_string(&vec![anonymous.clone()]).unwrap()).unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let err = store.save(&anonymous).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_records_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, serde_json::to_string(&vec![record("1", "MIT License")]).unwrap())
            .unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let mut updated = record("1", "MIT");
        updated.spdx_id = Some("MIT".to_string());
        let err = store.save(&updated).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));

        let records = store.records().await;
        assert_eq!(records[0].name, "MIT License");
        assert_eq!(records[0].spdx_id, None);
    }

    #[tokio::test]
    async fn test_json_store_rejects_unknown_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "[]").unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let err = store.save(&record("9", "MIT")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_open_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = JsonFileStore::open(dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_memory_store_upserts() {
        let store = MemoryStore::new();
        store.save(&record("1", "GPL")).await.unwrap();
        store.save(&record("1", "GPL-3.0")).await.unwrap();
        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "GPL-3.0");
    }
}
