//! Error types for the item catalog core

use crate::condition::Logic;
use thiserror::Error;

/// Main error type for the item catalog core
///
/// Every variant that concerns a source record carries the path of the
/// offending field, relative to the record that was being mapped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Malformed record at `{field_path}`: {reason}")]
    MalformedRecord { field_path: String, reason: String },

    #[error("Empty {logic} operator at `{field_path}`")]
    EmptyOperator { field_path: String, logic: Logic },

    #[error("Condition at `{field_path}` expands to {groups} groups (limit {limit})")]
    ConditionTooLarge {
        field_path: String,
        groups: usize,
        limit: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn malformed(field_path: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::MalformedRecord {
            field_path: field_path.into(),
            reason: reason.into(),
        }
    }

    /// Path of the field that caused the failure, if the error concerns a record
    pub fn field_path(&self) -> Option<&str> {
        match self {
            CatalogError::MalformedRecord { field_path, .. }
            | CatalogError::EmptyOperator { field_path, .. }
            | CatalogError::ConditionTooLarge { field_path, .. } => Some(field_path),
            CatalogError::Config(_) => None,
        }
    }

    /// Re-root the field path under `parent`, e.g. `level` -> `items[3].level`
    pub fn within(self, parent: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                parent.to_string()
            } else if path.starts_with('[') {
                format!("{}{}", parent, path)
            } else {
                format!("{}.{}", parent, path)
            }
        };

        match self {
            CatalogError::MalformedRecord { field_path, reason } => {
                CatalogError::MalformedRecord {
                    field_path: join(field_path),
                    reason,
                }
            }
            CatalogError::EmptyOperator { field_path, logic } => CatalogError::EmptyOperator {
                field_path: join(field_path),
                logic,
            },
            CatalogError::ConditionTooLarge {
                field_path,
                groups,
                limit,
            } => CatalogError::ConditionTooLarge {
                field_path: join(field_path),
                groups,
                limit,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Config(err.to_string())
    }
}

/// Result type alias for the item catalog core
pub type Result<T> = std::result::Result<T, CatalogError>;
