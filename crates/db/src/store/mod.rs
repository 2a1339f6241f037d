//! [`EntityStore`](roster_core::store::EntityStore) adapters over PostgreSQL.
//!
//! Each adapter owns a clone of the pool and delegates SQL to the matching
//! repository. Driver errors are translated into [`StoreError`] here, with
//! the `sqlx::Error` kept as the source.

mod employee;
mod role;

pub use employee::PgEmployeeStore;
pub use role::PgRoleStore;

use roster_core::error::{BoxError, StoreError};

/// Transaction handle used by the PostgreSQL stores.
///
/// Dropping it without `commit`/`rollback` queues a rollback on the
/// connection before it returns to the pool.
pub type PgTx = sqlx::Transaction<'static, sqlx::Postgres>;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL error code for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

enum Violation {
    Unique(String),
    ForeignKey(String),
}

fn violation(err: &sqlx::Error) -> Option<Violation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let constraint = db_err.constraint().unwrap_or("unknown").to_string();
    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => Some(Violation::Unique(constraint)),
        Some(FOREIGN_KEY_VIOLATION) => Some(Violation::ForeignKey(constraint)),
        _ => None,
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
    )
}

/// Translate a driver error, using `fallback` for anything that is neither a
/// constraint violation nor a lost connection.
fn classify(err: sqlx::Error, fallback: fn(BoxError) -> StoreError) -> StoreError {
    match violation(&err) {
        Some(Violation::Unique(constraint)) => StoreError::UniqueViolation {
            constraint,
            source: Box::new(err),
        },
        Some(Violation::ForeignKey(constraint)) => StoreError::ForeignKeyViolation {
            constraint,
            source: Box::new(err),
        },
        None if is_connection_error(&err) => connection_error(err),
        None => fallback(Box::new(err)),
    }
}

pub(crate) fn connection_error(err: sqlx::Error) -> StoreError {
    tracing::warn!(error = %err, "Database connection failure");
    StoreError::Connection(Box::new(err))
}

pub(crate) fn query_error(err: sqlx::Error) -> StoreError {
    classify(err, StoreError::Query)
}

pub(crate) fn insert_error(err: sqlx::Error) -> StoreError {
    classify(err, StoreError::Insert)
}
