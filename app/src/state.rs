use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::{Authenticator, SharedPassword};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub config: Config,
    pub auth: Arc<dyn Authenticator>,
}

impl AppState {
    /// State guarded by the shared admin password from `config`.
    pub fn new(conn: DatabaseConnection, config: Config) -> Self {
        let auth = Arc::new(SharedPassword::new(config.admin_password.clone()));
        Self { conn, config, auth }
    }
}
