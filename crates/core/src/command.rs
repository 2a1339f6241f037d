//! Validated command pipeline over an [`EntityStore`].
//!
//! [`CommandService::create`] is the uniqueness-checked creation flow:
//!
//! ```text
//! Validating -> TxOpen -> Checking -> (Inserting | Aborting) -> Closed
//! ```
//!
//! The transaction is opened once, the check and insert run as a single
//! fallible step, and that step's result alone decides between commit and
//! rollback. A panic or a dropped future skips that decision, in which case
//! the store's transaction handle aborts on drop.
//!
//! The pre-insert existence check is a fast path. Two concurrent creations
//! of the same name can both pass it; the store's unique constraint then
//! rejects the second insert, which is reported as the same
//! [`CoreError::Conflict`].

use std::borrow::Cow;
use std::future::Future;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use validator::{Validate, ValidationError};

use crate::error::{CoreError, StoreError};
use crate::store::{EntityStore, NamedInput};
use crate::types::DbId;
use crate::validation::{self, FieldOrder};

/// Request body naming a set of record ids (`{ "ids": [1, 2, 3] }`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdList {
    #[validate(length(min = 1), custom(function = "positive_ids"))]
    pub ids: Vec<DbId>,
}

impl FieldOrder for IdList {
    const FIELDS: &'static [&'static str] = &["ids"];
}

impl From<Vec<DbId>> for IdList {
    fn from(ids: Vec<DbId>) -> Self {
        Self { ids }
    }
}

fn positive_ids(ids: &[DbId]) -> Result<(), ValidationError> {
    match ids.iter().find(|id| **id < 1) {
        Some(id) => {
            let mut err = ValidationError::new("range");
            err.add_param(Cow::from("min"), &1);
            err.add_param(Cow::from("value"), id);
            Err(err)
        }
        None => Ok(()),
    }
}

/// Orchestrates validation, storage, and error classification for one
/// entity kind.
///
/// Every method returns either a response projection or a classified
/// [`CoreError`]; raw [`StoreError`]s never escape unwrapped.
pub struct CommandService<S> {
    store: S,
}

impl<S: EntityStore> CommandService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `input` and insert it unless its name is already taken.
    ///
    /// Each store step races `cancel`. Once a transaction is open, every
    /// outcome (including cancellation) terminates it before returning.
    pub async fn create(
        &self,
        input: &S::Create,
        cancel: &CancellationToken,
    ) -> Result<S::Response, CoreError> {
        validation::validate(input)?;
        let name = input.name();

        let mut tx = until_cancelled(cancel, self.store.begin())
            .await
            .map_err(|e| {
                CoreError::infrastructure(
                    format!("error opening transaction to create {}", S::ENTITY),
                    e,
                )
            })?;

        match self.check_and_insert(&mut tx, input, cancel).await {
            Ok(record) => {
                self.store.commit(tx).await.map_err(|e| {
                    CoreError::infrastructure(
                        format!("error committing {} '{name}'", S::ENTITY),
                        e,
                    )
                })?;
                tracing::info!(entity = S::ENTITY, name = %name, "Record created");
                Ok(S::Response::from(record))
            }
            Err(err) => {
                if let Err(rollback_err) = self.store.rollback(tx).await {
                    tracing::warn!(
                        entity = S::ENTITY,
                        error = %rollback_err,
                        "Failed to roll back create transaction",
                    );
                }
                Err(err)
            }
        }
    }

    async fn check_and_insert(
        &self,
        tx: &mut S::Tx,
        input: &S::Create,
        cancel: &CancellationToken,
    ) -> Result<S::Record, CoreError> {
        let name = input.name();

        let exists = until_cancelled(cancel, self.store.exists_by_name(tx, name))
            .await
            .map_err(|e| {
                CoreError::infrastructure(
                    format!("error checking whether {} '{name}' exists", S::ENTITY),
                    e,
                )
            })?;

        if exists {
            tracing::debug!(entity = S::ENTITY, name = %name, "Name already taken");
            return Err(conflict::<S>(Some(name)));
        }

        until_cancelled(cancel, self.store.insert(tx, input))
            .await
            .map_err(|e| classify_write::<S>(format!("error creating {} '{name}'", S::ENTITY), Some(name), e))
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<S::Response, CoreError> {
        require_id(id)?;
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| {
                CoreError::infrastructure(format!("error finding {} with id {id}", S::ENTITY), e)
            })?
            .map(S::Response::from)
            .ok_or(CoreError::NotFound {
                entity: S::ENTITY,
                id,
            })
    }

    pub async fn find_all(&self) -> Result<Vec<S::Response>, CoreError> {
        let records = self.store.find_all().await.map_err(|e| {
            CoreError::infrastructure(format!("error listing {} records", S::ENTITY), e)
        })?;
        Ok(records.into_iter().map(S::Response::from).collect())
    }

    /// Records matching `ids`; ids that match nothing are skipped.
    pub async fn find_all_by_ids(&self, ids: &IdList) -> Result<Vec<S::Response>, CoreError> {
        validation::validate(ids)?;
        let records = self.store.find_all_by_ids(&ids.ids).await.map_err(|e| {
            CoreError::infrastructure(
                format!("error finding {} records with ids {:?}", S::ENTITY, ids.ids),
                e,
            )
        })?;
        Ok(records.into_iter().map(S::Response::from).collect())
    }

    pub async fn update(&self, id: DbId, input: &S::Update) -> Result<S::Response, CoreError> {
        require_id(id)?;
        validation::validate(input)?;

        let record = self
            .store
            .update(id, input)
            .await
            .map_err(|e| {
                classify_write::<S>(format!("error updating {} with id {id}", S::ENTITY), None, e)
            })?
            .ok_or(CoreError::NotFound {
                entity: S::ENTITY,
                id,
            })?;

        tracing::info!(entity = S::ENTITY, id, "Record updated");
        Ok(S::Response::from(record))
    }

    pub async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        require_id(id)?;
        let deleted = self.store.delete_by_id(id).await.map_err(|e| {
            CoreError::infrastructure(format!("error deleting {} with id {id}", S::ENTITY), e)
        })?;

        if !deleted {
            return Err(CoreError::NotFound {
                entity: S::ENTITY,
                id,
            });
        }

        tracing::info!(entity = S::ENTITY, id, "Record deleted");
        Ok(())
    }

    /// Delete every record in `ids`. Partial matches are not an error.
    pub async fn delete_by_ids(&self, ids: &IdList) -> Result<(), CoreError> {
        validation::validate(ids)?;
        let removed = self.store.delete_by_ids(&ids.ids).await.map_err(|e| {
            CoreError::infrastructure(
                format!("error deleting {} records with ids {:?}", S::ENTITY, ids.ids),
                e,
            )
        })?;

        tracing::info!(
            entity = S::ENTITY,
            requested = ids.ids.len(),
            removed,
            "Records deleted",
        );
        Ok(())
    }
}

/// Run one store step unless `cancel` fires first.
async fn until_cancelled<T>(
    cancel: &CancellationToken,
    step: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(StoreError::Cancelled),
        result = step => result,
    }
}

fn require_id(id: DbId) -> Result<(), CoreError> {
    if id < 1 {
        return Err(CoreError::Validation(
            "Field id must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn conflict<S: EntityStore>(name: Option<&str>) -> CoreError {
    match name {
        Some(name) => CoreError::Conflict(format!("{} with name '{name}' already exists", S::ENTITY)),
        None => CoreError::Conflict(format!("{} with this name already exists", S::ENTITY)),
    }
}

/// Classify a failed insert or update. Constraint violations are caller
/// errors; everything else is infrastructure.
fn classify_write<S: EntityStore>(context: String, name: Option<&str>, err: StoreError) -> CoreError {
    match err {
        StoreError::UniqueViolation { constraint, .. } => {
            tracing::debug!(entity = S::ENTITY, %constraint, "Unique constraint rejected write");
            conflict::<S>(name)
        }
        StoreError::ForeignKeyViolation { constraint, .. } => {
            tracing::debug!(entity = S::ENTITY, %constraint, "Foreign key rejected write");
            CoreError::Validation(format!(
                "{} references a record that does not exist",
                S::ENTITY
            ))
        }
        other => CoreError::infrastructure(context, other),
    }
}
