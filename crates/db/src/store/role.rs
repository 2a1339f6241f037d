use roster_core::error::StoreError;
use roster_core::store::EntityStore;
use roster_core::types::DbId;

use super::{connection_error, insert_error, query_error, PgTx};
use crate::models::role::{CreateRole, Role, RoleResponse, UpdateRole};
use crate::repositories::RoleRepo;
use crate::DbPool;

/// Role storage backed by the `roles` table.
#[derive(Clone)]
pub struct PgRoleStore {
    pool: DbPool,
}

impl PgRoleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl EntityStore for PgRoleStore {
    const ENTITY: &'static str = "role";

    type Record = Role;
    type Response = RoleResponse;
    type Create = CreateRole;
    type Update = UpdateRole;
    type Tx = PgTx;

    async fn begin(&self) -> Result<PgTx, StoreError> {
        self.pool.begin().await.map_err(connection_error)
    }

    async fn exists_by_name(&self, tx: &mut PgTx, name: &str) -> Result<bool, StoreError> {
        RoleRepo::exists_by_name(&mut **tx, name)
            .await
            .map_err(query_error)
    }

    async fn insert(&self, tx: &mut PgTx, input: &CreateRole) -> Result<Role, StoreError> {
        RoleRepo::create(&mut **tx, input)
            .await
            .map_err(insert_error)
    }

    async fn commit(&self, tx: PgTx) -> Result<(), StoreError> {
        tx.commit().await.map_err(query_error)
    }

    async fn rollback(&self, tx: PgTx) -> Result<(), StoreError> {
        tx.rollback().await.map_err(query_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Role>, StoreError> {
        RoleRepo::find_by_id(&self.pool, id)
            .await
            .map_err(query_error)
    }

    async fn find_all(&self) -> Result<Vec<Role>, StoreError> {
        RoleRepo::list(&self.pool).await.map_err(query_error)
    }

    async fn find_all_by_ids(&self, ids: &[DbId]) -> Result<Vec<Role>, StoreError> {
        RoleRepo::list_by_ids(&self.pool, ids)
            .await
            .map_err(query_error)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateRole,
    ) -> Result<Option<Role>, StoreError> {
        RoleRepo::update(&self.pool, id, input)
            .await
            .map_err(query_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        RoleRepo::delete(&self.pool, id)
            .await
            .map_err(query_error)
    }

    async fn delete_by_ids(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        RoleRepo::delete_many(&self.pool, ids)
            .await
            .map_err(query_error)
    }
}
