//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading or writing a key in the store failed.
    #[error("Storage error for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    /// The store's backing directory could not be prepared.
    #[error("Storage directory error at {path}: {reason}")]
    StorageDirectory { path: PathBuf, reason: String },

    /// The stored blob could not be parsed or the library could not be
    /// serialized.
    #[error("Serialization failed for key '{key}': {reason}")]
    Serialization { key: String, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Library store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Storage { key, .. } => vec![
                format!("Failed to access stored key: {}", key),
                "Check that the data directory is readable and writable".into(),
            ],
            Self::StorageDirectory { path, .. } => vec![
                format!("Failed to prepare: {}", path.display()),
                "Set storage.data_dir in the config file to another location".into(),
            ],
            Self::Serialization { .. } => vec![
                "The stored library is not valid JSON".into(),
                "Restore it from a backup: cardsmith backup import <FILE>".into(),
            ],
            Self::StoreLockError => vec![
                "The library store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Storage { .. } | Self::StorageDirectory { .. } => ErrorCategory::Storage,
            Self::Serialization { .. } => ErrorCategory::Storage,
            Self::StoreLockError => ErrorCategory::Storage,
        }
    }
}
