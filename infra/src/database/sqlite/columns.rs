//! Row decoding helpers shared by the SQLite repositories.
//!
//! Nullable text and integer columns decode to their defaults; array-valued
//! fields are stored as JSON text.

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

use resume_core::errors::DomainError;

/// Map a driver error to `DomainError::Internal`, logging the detail
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

pub(crate) fn text(row: &SqliteRow, column: &str) -> Result<String, DomainError> {
    row.try_get::<Option<String>, _>(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", column, e),
        })
}

pub(crate) fn integer(row: &SqliteRow, column: &str) -> Result<i64, DomainError> {
    row.try_get::<Option<i64>, _>(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", column, e),
        })
}

pub(crate) fn flag(row: &SqliteRow, column: &str) -> Result<bool, DomainError> {
    row.try_get::<Option<bool>, _>(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to get {}: {}", column, e),
        })
}

/// Decode a JSON array column. NULL and empty text decode to an empty list.
pub(crate) fn json_list<T: DeserializeOwned>(
    row: &SqliteRow,
    column: &str,
) -> Result<Vec<T>, DomainError> {
    let raw = text(row, column)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(column, error = %e, "Stored JSON column is not decodable");
        DomainError::Internal {
            message: format!("Invalid JSON in {}: {}", column, e),
        }
    })
}

pub(crate) fn to_json<T: Serialize>(values: &[T]) -> Result<String, DomainError> {
    serde_json::to_string(values).map_err(|e| DomainError::Internal {
        message: format!("Failed to encode JSON column: {}", e),
    })
}

/// Like [`db_error`], but constraint violations caused by the written values
/// become `DomainError::Validation`.
pub(crate) fn write_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        if let sqlx::Error::Database(db) = &e {
            if db.is_foreign_key_violation() {
                return DomainError::Validation {
                    message: "referenced record does not exist".to_string(),
                };
            }
            if db.is_unique_violation() {
                return DomainError::Validation {
                    message: "record already exists".to_string(),
                };
            }
        }
        db_error(context)(e)
    }
}
