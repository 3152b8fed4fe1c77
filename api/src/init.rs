use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use app::config::Config;
use app::state::AppState;

use crate::routers::create_router;

pub fn setup_router(config: Config, conn: DatabaseConnection) -> Router {
    create_router(AppState::new(conn, config))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub fn setup_config() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();
    Config::from_env()
}

pub async fn setup_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_lifetime(std::time::Duration::from_secs(60))
        .min_connections(1)
        .max_connections(20)
        .sqlx_logging(false);

    Database::connect(opt).await
}
