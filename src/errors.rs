// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Error raised by a [`crate::storage::KeyValueStore`] backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a registration is refused before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select the transaction type (positive or negative)")]
    MissingType,
    #[error("Select a category")]
    MissingCategory,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Name is required")]
    EmptyName,
    #[error("Amount must be a positive number, got '{0}'")]
    InvalidAmount(String),
}

#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Could not read stored transactions under '{key}': {source}")]
    StorageRead {
        key: String,
        #[source]
        source: BackendError,
    },
    #[error("Could not write transactions under '{key}': {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: BackendError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl FinanceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FinanceError::Validation(_))
    }
}
