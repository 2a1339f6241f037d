use crate::types::DbId;

/// Boxed driver error kept as the `source` of a [`StoreError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raw failure reported by an [`EntityStore`](crate::store::EntityStore).
///
/// Store adapters translate driver errors into one of these variants and keep
/// the original error reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection could be acquired (pool exhausted, connection lost).
    #[error("connection failure")]
    Connection(#[source] BoxError),

    /// A read, update, or delete statement failed.
    #[error("query failure")]
    Query(#[source] BoxError),

    /// An insert statement failed.
    #[error("insert failure")]
    Insert(#[source] BoxError),

    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation {
        constraint: String,
        #[source]
        source: BoxError,
    },

    /// A foreign key constraint rejected the write.
    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation {
        constraint: String,
        #[source]
        source: BoxError,
    },

    /// The caller cancelled the operation before the store call finished.
    #[error("operation cancelled")]
    Cancelled,
}

/// Classified outcome of every failed core operation.
///
/// This set is closed: the API layer maps each variant to a transport status
/// and never inspects the inner store error to re-classify it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{context}: {source}")]
    Infrastructure {
        context: String,
        #[source]
        source: StoreError,
    },
}

impl CoreError {
    /// Wrap a store failure with a human-readable context line.
    pub fn infrastructure(context: impl Into<String>, source: StoreError) -> Self {
        Self::Infrastructure {
            context: context.into(),
            source,
        }
    }

    /// The underlying store failure, if this is an infrastructure error.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Infrastructure { source, .. } => Some(source),
            _ => None,
        }
    }
}
