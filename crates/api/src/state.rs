use std::sync::Arc;

use roster_core::command::CommandService;
use roster_db::store::{PgEmployeeStore, PgRoleStore};
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Command pipeline for employees.
    pub employees: Arc<CommandService<PgEmployeeStore>>,
    /// Command pipeline for roles.
    pub roles: Arc<CommandService<PgRoleStore>>,
    /// Cancelled when the server starts shutting down. Handlers pass a child
    /// token into long-running store work.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Build the state, wiring both command services to `pool`.
    pub fn new(pool: roster_db::DbPool, config: ServerConfig, shutdown: CancellationToken) -> Self {
        Self {
            employees: Arc::new(CommandService::new(PgEmployeeStore::new(pool.clone()))),
            roles: Arc::new(CommandService::new(PgRoleStore::new(pool.clone()))),
            pool,
            config: Arc::new(config),
            shutdown,
        }
    }
}
