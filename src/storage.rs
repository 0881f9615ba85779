// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction collection lives as one JSON blob under a single key of a
//! key-value store. Every append rewrites the whole blob.

use crate::errors::{BackendError, FinanceError};
use crate::models::TransactionRecord;
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

pub const TRANSACTIONS_KEY: &str = "@pocketfin:transactions";

/// Appends are O(n) in the collection size; past this many records each
/// append logs a warning.
pub const GROWTH_WARN_THRESHOLD: usize = 5_000;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set(key, value)
    }
}

/// Key-value pairs in the `kv` table of the application database.
pub struct SqliteKv<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteKv<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteKv { conn }
    }
}

impl KeyValueStore for SqliteKv<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let kv = Self::default();
        kv.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        kv
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct TransactionStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> TransactionStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, TRANSACTIONS_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        TransactionStore {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    /// Empty when nothing has been stored yet. A blob that exists but does
    /// not decode is an error, never an empty list.
    pub fn load_all(&self) -> Result<Vec<TransactionRecord>, FinanceError> {
        let blob = self.kv.get(&self.key).map_err(|source| FinanceError::StorageRead {
            key: self.key.clone(),
            source,
        })?;
        let Some(blob) = blob else {
            debug!(key = %self.key, "no stored transactions");
            return Ok(Vec::new());
        };
        let records: Vec<TransactionRecord> =
            serde_json::from_str(&blob).map_err(|e| FinanceError::StorageRead {
                key: self.key.clone(),
                source: Box::new(e),
            })?;
        debug!(key = %self.key, count = records.len(), "loaded transactions");
        Ok(records)
    }

    pub fn append_one(&self, record: TransactionRecord) -> Result<(), FinanceError> {
        let mut records = self.load_all()?;
        records.push(record);
        if records.len() > GROWTH_WARN_THRESHOLD {
            warn!(
                key = %self.key,
                count = records.len(),
                threshold = GROWTH_WARN_THRESHOLD,
                "transaction collection is large; every append rewrites all of it"
            );
        }
        let blob = serde_json::to_string(&records).map_err(|e| FinanceError::StorageWrite {
            key: self.key.clone(),
            source: Box::new(e),
        })?;
        self.kv
            .set(&self.key, &blob)
            .map_err(|source| FinanceError::StorageWrite {
                key: self.key.clone(),
                source,
            })?;
        debug!(key = %self.key, count = records.len(), "stored transactions");
        Ok(())
    }
}
