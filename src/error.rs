// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types shared by the library modules.

/// All errors produced by the tracker core and its storage backends.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A candidate transaction or setting broke a data-model invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// The SQLite backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend failure (poisoned lock, unavailable device, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl TrackerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = core::result::Result<T, TrackerError>;
