//! Storage port used by [`CommandService`](crate::command::CommandService).
//!
//! One implementation exists per entity kind. Every method is a single
//! blocking round trip to the backing store; the transactional methods take
//! the store's own [`EntityStore::Tx`] handle so the existence check and the
//! insert observe the same snapshot.

use std::future::Future;

use validator::Validate;

use crate::error::StoreError;
use crate::types::DbId;
use crate::validation::FieldOrder;

/// A create request carrying the unique name of the new record.
pub trait NamedInput: Validate + FieldOrder {
    fn name(&self) -> &str;
}

/// Persistence operations for one entity kind.
///
/// # Transaction handles
///
/// A [`Tx`](EntityStore::Tx) obtained from [`begin`](EntityStore::begin) must
/// be passed to exactly one of [`commit`](EntityStore::commit) or
/// [`rollback`](EntityStore::rollback). Dropping a handle that was never
/// terminated must abort the transaction, so a panic or a cancelled future
/// cannot leave it open.
pub trait EntityStore: Send + Sync {
    /// Lower-case entity name used in error messages (`"employee"`).
    const ENTITY: &'static str;

    /// Stored row.
    type Record: Send;
    /// Transport projection of a [`Record`](EntityStore::Record).
    type Response: From<Self::Record> + Send;
    /// Validated create request.
    type Create: NamedInput + Send + Sync;
    /// Validated update request.
    type Update: Validate + FieldOrder + Send + Sync;
    /// Open transaction handle.
    type Tx: Send;

    /// Open a transaction.
    fn begin(&self) -> impl Future<Output = Result<Self::Tx, StoreError>> + Send;

    /// Whether a record with exactly this name exists, as seen by `tx`.
    fn exists_by_name(
        &self,
        tx: &mut Self::Tx,
        name: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Insert a record inside `tx`, returning it with its assigned id and
    /// timestamps.
    fn insert(
        &self,
        tx: &mut Self::Tx,
        input: &Self::Create,
    ) -> impl Future<Output = Result<Self::Record, StoreError>> + Send;

    fn commit(&self, tx: Self::Tx) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn rollback(&self, tx: Self::Tx) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn find_by_id(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Record>, StoreError>> + Send;

    /// All records ordered by id ascending.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Self::Record>, StoreError>> + Send;

    /// Records whose id is in `ids`; unknown ids are skipped.
    fn find_all_by_ids(
        &self,
        ids: &[DbId],
    ) -> impl Future<Output = Result<Vec<Self::Record>, StoreError>> + Send;

    /// Apply `input` to the record, returning `None` if it does not exist.
    fn update(
        &self,
        id: DbId,
        input: &Self::Update,
    ) -> impl Future<Output = Result<Option<Self::Record>, StoreError>> + Send;

    /// Returns `true` if a row was deleted.
    fn delete_by_id(&self, id: DbId) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Delete every record whose id is in `ids`, returning the number removed.
    /// Ids that match nothing are not an error.
    fn delete_by_ids(&self, ids: &[DbId]) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
