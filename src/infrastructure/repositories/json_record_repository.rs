use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::entities::collection;
use crate::domain::entities::record::Record;
use crate::domain::repositories::record_repository::{RecordRepository, RepositoryError, Result};
use crate::infrastructure::repositories::json_storage;

// implementation of RecordRepository that keeps the whole collection in one JSON file
pub struct JsonRecordRepository<R: Record> {
    // held across load-modify-save so mutations never interleave
    records: Mutex<Vec<R>>,
    file_path: PathBuf,
}

impl<R: Record> JsonRecordRepository<R> {
    /// Open the store and load whatever the file holds. A corrupt or unreadable file is logged and the store starts empty.
    pub async fn open(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let records = match read_file::<R>(file_path.clone()).await {
            Ok(records) => {
                info!(
                    "Loaded {} {} record(s) from {}",
                    records.len(),
                    R::KIND,
                    file_path.display()
                );
                records
            }
            Err(e) => {
                error!("Error loading records from {}: {}", file_path.display(), e);
                Vec::new()
            }
        };

        Self {
            records: Mutex::new(records),
            file_path,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    // write first, then swap the in-memory copy; a failed write leaves both untouched
    async fn persist(&self, current: &mut Vec<R>, updated: Vec<R>, action: &str) -> Result<Vec<R>> {
        if let Err(e) = write_file(self.file_path.clone(), updated.clone()).await {
            error!("Error saving records after {}: {}", action, e);
            return Err(e);
        }
        *current = updated.clone();
        debug!("Saved {} record(s) after {}", updated.len(), action);
        Ok(updated)
    }
}

fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

async fn read_file<R: Record>(path: PathBuf) -> Result<Vec<R>> {
    tokio::task::spawn_blocking(move || json_storage::load_records::<R>(&path))
        .await
        .map_err(|e| RepositoryError::IoError(format!("Load task failed: {}", e)))?
}

async fn write_file<R: Record>(path: PathBuf, records: Vec<R>) -> Result<()> {
    tokio::task::spawn_blocking(move || json_storage::save_records(&records, &path))
        .await
        .map_err(|e| RepositoryError::IoError(format!("Save task failed: {}", e)))?
}

#[async_trait]
impl<R: Record> RecordRepository<R> for JsonRecordRepository<R> {
    async fn load(&self) -> Result<Vec<R>> {
        read_file(self.file_path.clone()).await
    }

    async fn save(&self, records: Vec<R>) -> Result<()> {
        let mut current = self.records.lock().await;
        self.persist(&mut current, records, "save").await?;
        Ok(())
    }

    async fn reload(&self) -> Vec<R> {
        let mut current = self.records.lock().await;
        match read_file::<R>(self.file_path.clone()).await {
            Ok(records) => {
                *current = records;
            }
            Err(e) => {
                error!(
                    "Error reloading records from {}, keeping {} in memory: {}",
                    self.file_path.display(),
                    current.len(),
                    e
                );
            }
        }
        current.clone()
    }

    async fn list(&self) -> Vec<R> {
        self.records.lock().await.clone()
    }

    async fn add(&self, fields: R::Fields) -> Result<Vec<R>> {
        let mut current = self.records.lock().await;
        let id = collection::next_id(&current, now_millis()).ok_or_else(|| {
            let e = RepositoryError::InvalidData(format!(
                "no {} id left after {}",
                R::KIND,
                u64::MAX
            ));
            error!("Error adding record: {}", e);
            e
        })?;
        let updated = collection::append(&current, R::new(id, fields));
        let updated = self.persist(&mut current, updated, "add").await?;
        info!("Added {} #{}", R::KIND, id);
        Ok(updated)
    }

    async fn update(&self, id: u64, fields: R::Fields) -> Result<Vec<R>> {
        let mut current = self.records.lock().await;
        let (updated, matched) = collection::replace_fields(&current, id, fields);
        if !matched {
            warn!("Couldn't find {} with ID {}, nothing updated", R::KIND, id);
        }
        self.persist(&mut current, updated, "update").await
    }

    async fn remove(&self, id: u64) -> Result<Vec<R>> {
        let mut current = self.records.lock().await;
        let (updated, removed) = collection::without(&current, id);
        let updated = self.persist(&mut current, updated, "remove").await?;
        if removed > 0 {
            info!("Removed {} #{}", R::KIND, id);
        }
        Ok(updated)
    }
}

impl<R: Record> std::fmt::Debug for JsonRecordRepository<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRecordRepository")
            .field("kind", &R::KIND)
            .field("file_path", &self.file_path)
            .finish()
    }
}
