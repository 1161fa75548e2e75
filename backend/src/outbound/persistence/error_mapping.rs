//! Translation of pool and Diesel failures into [`PersistenceError`].
//!
//! Integrity violations keep the name of the constraint that fired so callers
//! can tell which reference was missing. Everything else collapses to a
//! connection or query error after the raw detail is logged at `debug`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PersistenceError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    PersistenceError::connection(error.into_message())
}

/// Map Diesel errors to the shared persistence taxonomy.
///
/// `DieselError::NotFound` carries no entity or id, so it falls through to a
/// query error. Lookups use `.optional()` and mutations raise
/// [`PersistenceError::NotFound`] themselves with the targeted id.
pub(crate) fn map_diesel_error(error: DieselError) -> PersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            table = info.table_name(),
            "diesel operation failed"
        ),
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            PersistenceError::unique_constraint_violation(constraint_label(
                info.constraint_name(),
                info.message(),
            ))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            PersistenceError::foreign_key_violation(constraint_label(
                info.constraint_name(),
                info.message(),
            ))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => PersistenceError::query("database query error"),
        _ => PersistenceError::query("database error"),
    }
}

/// Prefer the constraint name; fall back to the server message.
fn constraint_label(constraint_name: Option<&str>, message: &str) -> String {
    constraint_name.unwrap_or(message).to_owned()
}

/// Turn an affected-row count from a targeted mutation into `NotFound`.
pub(crate) fn expect_affected(
    affected: usize,
    entity: &'static str,
    id: i32,
) -> Result<(), PersistenceError> {
    if affected == 0 {
        Err(PersistenceError::not_found(entity, id))
    } else {
        Ok(())
    }
}
