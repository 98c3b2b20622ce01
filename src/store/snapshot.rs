//! Durable snapshots of the store tables
//!
//! A snapshot is a single JSON document:
//!
//! ```text
//! { "format_version": 1, "saved_at": "...", "checksum": <crc32>, "tables": { ... } }
//! ```
//!
//! The checksum is a CRC32 over the canonical JSON encoding of `tables`.
//! Writes go to a sibling `.tmp` file which is fsynced and then renamed
//! over the target, so a crash mid-write leaves the previous snapshot intact.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::tables::Tables;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDocument<T> {
    format_version: u32,
    saved_at: DateTime<Utc>,
    checksum: u32,
    tables: T,
}

fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Location of a snapshot on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Loads the tables. `Ok(None)` when no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` if the file exists but cannot be read
    /// - `StoreError::Encoding` if the file is not a snapshot document
    /// - `StoreError::Corruption` on version or checksum mismatch
    pub fn load(&self) -> StoreResult<Option<Tables>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::io(
                    format!("Failed to read snapshot {}", self.path.display()),
                    e,
                ))
            }
        };

        let document: SnapshotDocument<Tables> = serde_json::from_slice(&bytes)?;

        if document.format_version != FORMAT_VERSION {
            return Err(StoreError::corruption(format!(
                "unsupported format version {} (expected {})",
                document.format_version, FORMAT_VERSION
            )));
        }

        let payload = serde_json::to_vec(&document.tables)?;
        let actual = compute_checksum(&payload);
        if actual != document.checksum {
            return Err(StoreError::corruption(format!(
                "checksum mismatch in {}: stored {:#010x}, computed {:#010x}",
                self.path.display(),
                document.checksum,
                actual
            )));
        }

        Ok(Some(document.tables))
    }

    /// Writes the tables, replacing any previous snapshot atomically.
    pub fn save(&self, tables: &Tables) -> StoreResult<()> {
        let payload = serde_json::to_vec(tables)?;
        let document = SnapshotDocument {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            checksum: compute_checksum(&payload),
            tables,
        };
        let encoded = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::io(
                    format!("Failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| {
            StoreError::io(format!("Failed to create {}", temp_path.display()), e)
        })?;
        file.write_all(&encoded)
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::io(format!("Failed to write {}", temp_path.display()), e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| {
            StoreError::io(
                format!("Failed to replace snapshot {}", self.path.display()),
                e,
            )
        })?;

        Ok(())
    }
}
