use roster_core::error::StoreError;
use roster_core::store::EntityStore;
use roster_core::types::DbId;

use super::{connection_error, insert_error, query_error, PgTx};
use crate::models::employee::{CreateEmployee, Employee, EmployeeResponse, UpdateEmployee};
use crate::repositories::EmployeeRepo;
use crate::DbPool;

/// Employee storage backed by the `employees` table.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl EntityStore for PgEmployeeStore {
    const ENTITY: &'static str = "employee";

    type Record = Employee;
    type Response = EmployeeResponse;
    type Create = CreateEmployee;
    type Update = UpdateEmployee;
    type Tx = PgTx;

    async fn begin(&self) -> Result<PgTx, StoreError> {
        self.pool.begin().await.map_err(connection_error)
    }

    async fn exists_by_name(&self, tx: &mut PgTx, name: &str) -> Result<bool, StoreError> {
        EmployeeRepo::exists_by_name(&mut **tx, name)
            .await
            .map_err(query_error)
    }

    async fn insert(&self, tx: &mut PgTx, input: &CreateEmployee) -> Result<Employee, StoreError> {
        EmployeeRepo::create(&mut **tx, input)
            .await
            .map_err(insert_error)
    }

    async fn commit(&self, tx: PgTx) -> Result<(), StoreError> {
        tx.commit().await.map_err(query_error)
    }

    async fn rollback(&self, tx: PgTx) -> Result<(), StoreError> {
        tx.rollback().await.map_err(query_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Employee>, StoreError> {
        EmployeeRepo::find_by_id(&self.pool, id)
            .await
            .map_err(query_error)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        EmployeeRepo::list(&self.pool).await.map_err(query_error)
    }

    async fn find_all_by_ids(&self, ids: &[DbId]) -> Result<Vec<Employee>, StoreError> {
        EmployeeRepo::list_by_ids(&self.pool, ids)
            .await
            .map_err(query_error)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, StoreError> {
        EmployeeRepo::update(&self.pool, id, input)
            .await
            .map_err(query_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        EmployeeRepo::delete(&self.pool, id)
            .await
            .map_err(query_error)
    }

    async fn delete_by_ids(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        EmployeeRepo::delete_many(&self.pool, ids)
            .await
            .map_err(query_error)
    }
}
