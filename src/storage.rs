// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value persistence boundary.
//!
//! Everything the tracker keeps between sessions goes through
//! [`KeyValueStore`]: the transaction list and budget of each user, the
//! logged-in user, and the viewed month. Values are plain strings (JSON for
//! the transaction list).

use crate::error::{Result, TrackerError};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::sync::Mutex;

pub const CURRENT_USER_KEY: &str = "currentUser";

pub fn transactions_key(user_id: &str) -> String {
    format!("transactions-{}", user_id)
}

pub fn budget_key(user_id: &str) -> String {
    format!("budget-{}", user_id)
}

pub fn view_month_key(user_id: &str) -> String {
    format!("month-{}", user_id)
}

/// String blob storage keyed by user-scoped keys.
///
/// A `set` either stores the whole value or fails; readers never see a
/// partially written value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl KeyValueStore for Connection {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.execute(
            "INSERT INTO kv(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.execute("DELETE FROM kv WHERE key=?1", params![key])?;
        Ok(())
    }
}

/// In-process store, used by tests and by embedders without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> TrackerError {
        TrackerError::Backend("memory store lock poisoned".into())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.data.lock().map_err(|_| Self::poisoned())?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| Self::poisoned())?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| Self::poisoned())?;
        data.remove(key);
        Ok(())
    }
}
