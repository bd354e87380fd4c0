// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! # Storage layer
//!
//! The application keeps its whole state under a handful of string keys in
//! a synchronous key-value medium. [`KeyValueStore`] is that medium;
//! [`PersistentStore`] sits in front of it and owns the serialization.
//!
//! ## Implementations
//!
//! - [`file::FileStore`]: one `<key>.json` file per key in the data directory.
//! - [`memory::MemoryStore`]: in-memory map used by tests.
//!
//! ## Failure policy
//!
//! Reads never fail from the caller's point of view: a missing key or data
//! that no longer decodes yields the caller's default. Writes are
//! best-effort: a failure is logged and the caller carries on with the value
//! it already holds in memory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod file;
#[cfg(test)]
pub mod memory;

/// Errors raised by a storage medium.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string-keyed storage medium.
pub trait KeyValueStore {
    /// Raw value stored under `key`, if any.
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Write-through cache front end over a [`KeyValueStore`].
pub struct PersistentStore {
    medium: Box<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(medium: Box<dyn KeyValueStore>) -> Self {
        Self { medium }
    }

    /// Load the value under `key`, or `default` when it is absent or
    /// unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.medium.get_string(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("Could not read '{}', using default: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Discarding unreadable data under '{}': {}", key, e);
                default
            }
        }
    }

    /// Persist `value` under `key`, logging instead of returning failures.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            log::error!("Error saving '{}': {}", key, e);
        }
    }

    pub fn try_save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        self.medium.set_string(key, &json)
    }
}
