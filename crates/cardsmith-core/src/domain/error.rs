// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::entities::CARD_FIELDS;

/// Root domain error type.
///
/// The three code transforms (render, inject, extract) never produce one of
/// these. They come from the stat registry and the project library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown stat key: {key}")]
    UnknownStat { key: String },

    #[error("Invalid value for stat '{key}': {reason}")]
    InvalidStatValue { key: String, reason: String },

    #[error("Malformed stat assignment '{input}': expected key=value")]
    MalformedAssignment { input: String },

    #[error("Unknown card field: {field}")]
    UnknownCardField { field: String },

    #[error("Invalid value for card field '{field}': {reason}")]
    InvalidCardValue { field: String, reason: String },

    #[error("Project name must not be empty")]
    EmptyProjectName,

    #[error("Project order does not match the existing projects: {reason}")]
    ReorderMismatch { reason: String },

    #[error("Invalid backup: {reason}")]
    InvalidBackup { reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Card {index} not found in project '{project}'")]
    CardNotFound { project: String, index: usize },

    #[error("Snippet not found: {id}")]
    SnippetNotFound { id: String },

    #[error("Snippet folder not found: {id}")]
    FolderNotFound { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownStrategy(s) => vec![
                format!("'{}' is not a known strategy", s),
                "Supported strategies: vanilla, modsplus, custom".into(),
            ],
            Self::UnknownStat { key } => vec![
                format!("No stat is registered under '{}'", key),
                "List available stats: cardsmith list".into(),
            ],
            Self::InvalidStatValue { .. } => {
                vec!["Stat values must be finite numbers, e.g. damage=1.5".into()]
            }
            Self::MalformedAssignment { .. } => vec![
                "Write stats as key=value pairs".into(),
                "Example: --stat damage=2 --stat ammo=3".into(),
            ],
            Self::UnknownCardField { .. } => {
                vec![format!("Editable fields: {}", CARD_FIELDS.join(", "))]
            }
            Self::ProjectNotFound { .. } => {
                vec!["List existing projects: cardsmith project list".into()]
            }
            Self::CardNotFound { project, .. } => vec![
                format!("Inspect the project: cardsmith project show {}", project),
                "Card indices start at 0".into(),
            ],
            Self::SnippetNotFound { .. } | Self::FolderNotFound { .. } => {
                vec!["List snippets and folders: cardsmith snippet list".into()]
            }
            Self::ReorderMismatch { .. } => vec![
                "Pass every existing project id exactly once".into(),
                "List existing projects: cardsmith project list".into(),
            ],
            Self::InvalidBackup { .. } => vec![
                "A backup must be a JSON object with 'projects' and 'snippets'".into(),
                "Create one with: cardsmith backup export".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectNotFound { .. }
            | Self::CardNotFound { .. }
            | Self::SnippetNotFound { .. }
            | Self::FolderNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

pub type DomainResult<T> = Result<T, DomainError>;
