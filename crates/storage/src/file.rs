// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file lease store on a shared filesystem
//!
//! Layout next to the database:
//! - `<db><suffix>`: the record, JSON `null` when absent
//! - `<db><suffix>.guard`: advisory lock serializing read-modify-write
//! - `<db><suffix>.tmp`: staging file renamed over the record

use crate::store::{LeaseStore, StoreError};
use fs2::FileExt;
use fz_core::config::lease_path_for;
use fz_core::LeaseRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Lease record persisted as a JSON file
#[derive(Clone, Debug)]
pub struct FileLeaseStore {
    path: PathBuf,
    guard_path: PathBuf,
    staging_path: PathBuf,
}

/// Exclusive hold on the guard file; unlocked when the handle closes
struct StoreGuard {
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    file: Option<File>,
}

impl FileLeaseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            guard_path: lease_path_for(&path, ".guard"),
            staging_path: lease_path_for(&path, ".tmp"),
            path,
        }
    }

    /// Store for the lease guarding `database`
    pub fn for_database(database: &Path, suffix: &str) -> Self {
        Self::new(lease_path_for(database, suffix))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Take the guard lock, blocking until other writers finish
    ///
    /// Filesystems without advisory locking fall back to unguarded writes.
    fn lock(&self) -> Result<StoreGuard, StoreError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.guard_path)
            .map_err(|e| self.io_error(&self.guard_path, e))?;

        match file.lock_exclusive() {
            Ok(()) => Ok(StoreGuard { file: Some(file) }),
            Err(e) if e.kind() == io::ErrorKind::Unsupported => {
                tracing::warn!(
                    path = %self.guard_path.display(),
                    "advisory locking unsupported, lease writes are unguarded"
                );
                Ok(StoreGuard { file: None })
            }
            Err(e) => Err(self.io_error(&self.guard_path, e)),
        }
    }

    fn read_unguarded(&self) -> Result<Option<LeaseRecord>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Stage the new contents and rename them into place
    fn write_unguarded(&self, record: Option<&LeaseRecord>) -> Result<(), StoreError> {
        let mut json = serde_json::to_vec_pretty(&record)?;
        json.push(b'\n');

        let mut staging =
            File::create(&self.staging_path).map_err(|e| self.io_error(&self.staging_path, e))?;
        staging
            .write_all(&json)
            .and_then(|()| staging.sync_all())
            .map_err(|e| self.io_error(&self.staging_path, e))?;
        drop(staging);

        fs::rename(&self.staging_path, &self.path).map_err(|e| self.io_error(&self.path, e))
    }
}

impl LeaseStore for FileLeaseStore {
    fn read(&self) -> Result<Option<LeaseRecord>, StoreError> {
        // Writers rename whole files into place, so readers need no guard
        self.read_unguarded()
    }

    fn write(&self, record: Option<&LeaseRecord>) -> Result<(), StoreError> {
        let _guard = self.lock()?;
        self.write_unguarded(record)
    }

    fn compare_and_swap(
        &self,
        expected: Option<&LeaseRecord>,
        new: Option<&LeaseRecord>,
    ) -> Result<bool, StoreError> {
        let _guard = self.lock()?;
        let current = self.read_unguarded()?;
        if current.as_ref() != expected {
            tracing::debug!(path = %self.path.display(), "lease changed since read");
            return Ok(false);
        }
        self.write_unguarded(new)?;
        Ok(true)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
