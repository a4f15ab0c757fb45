// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser storage-state files: cookies plus per-origin storage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors reading or writing a storage-state file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("cannot access storage state {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid storage-state document.
    #[error("invalid storage state {}: {source}", .path.display())]
    Parse {
        /// The file involved.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted browser storage.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct StorageState {
    /// Cookies across all domains.
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    /// Per-origin storage entries.
    #[serde(default)]
    pub origins: Vec<OriginState>,
}

/// One cookie.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub path: String,
    /// Unix time in seconds; absent for session cookies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<f64>,
    #[serde(default, rename = "httpOnly")]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, rename = "sameSite", skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
}

/// Storage entries for one origin.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct OriginState {
    pub origin: String,
    #[serde(default, rename = "localStorage")]
    pub local_storage: Vec<LocalStorageEntry>,
}

/// One localStorage key/value pair.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LocalStorageEntry {
    pub name: String,
    pub value: String,
}

impl StorageState {
    /// Read and validate a storage-state file.
    pub async fn load(path: &Path) -> Result<Self, StorageError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the state as pretty-printed JSON.
    pub async fn save(&self, path: &Path) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
