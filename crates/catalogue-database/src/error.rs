//! Translation of driver errors into application errors.
//!
//! Writes rejected by a unique index or a foreign key get a fixed,
//! human-readable message. Other constraint failures keep the driver's
//! message. Everything else is a plain database error.

use sqlx::error::DatabaseError;

use catalogue_core::error::{AppError, ErrorKind};

/// Message returned when a unique index rejects a write.
pub const DUPLICATE_MESSAGE: &str = "The record is already registered";

/// Message returned when a foreign key rejects a write.
pub const MISSING_REFERENCE_MESSAGE: &str = "The referenced record does not exist";

// SQLite extended result codes.
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";

/// Classify a sqlx error. `context` prefixes the message of non-constraint
/// failures.
pub fn classify(err: sqlx::Error, context: &str) -> AppError {
    let kind = match &err {
        sqlx::Error::Database(db_err) => constraint_kind(db_err.as_ref()),
        _ => None,
    };

    match kind {
        Some(ErrorKind::Conflict) => {
            AppError::with_source(ErrorKind::Conflict, DUPLICATE_MESSAGE, err)
        }
        Some(ErrorKind::InvalidReference) => {
            AppError::with_source(ErrorKind::InvalidReference, MISSING_REFERENCE_MESSAGE, err)
        }
        Some(kind) => {
            let message = match &err {
                sqlx::Error::Database(db_err) => db_err.message().to_string(),
                other => other.to_string(),
            };
            AppError::with_source(kind, message, err)
        }
        None => AppError::with_source(ErrorKind::Database, format!("{context}: {err}"), err),
    }
}

fn constraint_kind(db_err: &dyn DatabaseError) -> Option<ErrorKind> {
    use sqlx::error::ErrorKind as DbKind;

    match db_err.kind() {
        DbKind::UniqueViolation => Some(ErrorKind::Conflict),
        DbKind::ForeignKeyViolation => Some(ErrorKind::InvalidReference),
        DbKind::NotNullViolation | DbKind::CheckViolation => Some(ErrorKind::Constraint),
        _ => match db_err.code().as_deref() {
            Some(SQLITE_CONSTRAINT_UNIQUE) | Some(SQLITE_CONSTRAINT_PRIMARYKEY) => {
                Some(ErrorKind::Conflict)
            }
            Some(SQLITE_CONSTRAINT_FOREIGNKEY) => Some(ErrorKind::InvalidReference),
            Some(code) if is_constraint_code(code) => Some(ErrorKind::Constraint),
            _ => None,
        },
    }
}

/// Any extended code whose primary code is `SQLITE_CONSTRAINT` (19).
fn is_constraint_code(code: &str) -> bool {
    code.parse::<u32>().is_ok_and(|c| c & 0xff == 19)
}
