//! Local identity store
//!
//! Durable single-record store for the install-scoped client UUID and
//! the cached numeric server id. This is the only persistent mutable
//! state in the core: writes are serialized behind a mutex, reads go
//! straight to disk. The record survives process restarts and is
//! removed only on explicit account deletion.

use async_trait::async_trait;
use dietly_shared::errors::StoreError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::error;

/// Identity record operations.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// The stored client UUID; `NotFound` on a fresh install.
    async fn get_uuid(&self) -> Result<String, StoreError>;

    /// Persist the client UUID. The storage layer permits repeated
    /// calls, but the rest of the system must never intentionally save
    /// two different values.
    async fn save_uuid(&self, uuid: &str) -> Result<(), StoreError>;

    /// Remove the record matching `uuid`; succeeds as a no-op when no
    /// matching record exists.
    async fn delete_uuid(&self, uuid: &str) -> Result<(), StoreError>;

    /// The cached server-assigned id, if one has been stored.
    async fn get_server_id(&self) -> Result<i64, StoreError>;

    /// Cache the server-assigned id next to the UUID. Fails with
    /// `NotFound` when no identity record exists yet.
    async fn save_server_id(&self, server_id: i64) -> Result<(), StoreError>;
}

/// The single on-disk record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct IdentityRecord {
    uuid: String,
    #[serde(default)]
    server_id: Option<i64>,
}

/// File-backed identity store. The record is written atomically
/// (temp file + rename) so a crash mid-write never corrupts it.
pub struct FileIdentityStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_record(&self) -> Result<Option<IdentityRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                error!(path = %self.path.display(), %err, "identity record read failed");
                return Err(StoreError::ReadError(err.to_string()));
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| StoreError::ReadError(format!("corrupt identity record: {}", err)))
    }

    async fn write_record(&self, record: &IdentityRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|err| StoreError::WriteError(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StoreError::WriteError(err.to_string()))?;
            }
        }

        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|err| StoreError::WriteError(err.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| StoreError::WriteError(err.to_string()))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[async_trait]
impl IdentityStore for FileIdentityStore {
    async fn get_uuid(&self) -> Result<String, StoreError> {
        match self.read_record().await? {
            Some(record) => Ok(record.uuid),
            None => Err(StoreError::NotFound),
        }
    }

    async fn save_uuid(&self, uuid: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        // A re-save of the same UUID keeps the cached server id; a new
        // UUID invalidates it.
        let server_id = match self.read_record().await? {
            Some(record) if record.uuid == uuid => record.server_id,
            _ => None,
        };
        self.write_record(&IdentityRecord {
            uuid: uuid.to_string(),
            server_id,
        })
        .await
    }

    async fn delete_uuid(&self, uuid: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        match self.read_record().await? {
            Some(record) if record.uuid == uuid => {
                match tokio::fs::remove_file(&self.path).await {
                    Ok(()) => Ok(()),
                    Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                    Err(err) => Err(StoreError::WriteError(err.to_string())),
                }
            }
            _ => Ok(()),
        }
    }

    async fn get_server_id(&self) -> Result<i64, StoreError> {
        match self.read_record().await? {
            Some(IdentityRecord {
                server_id: Some(id),
                ..
            }) => Ok(id),
            _ => Err(StoreError::NotFound),
        }
    }

    async fn save_server_id(&self, server_id: i64) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.read_record().await?.ok_or(StoreError::NotFound)?;
        record.server_id = Some(server_id);
        self.write_record(&record).await
    }
}
