use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::migrate;

/// Connects to `db_url` (normally `sqlite::memory:`) and applies every
/// migration.
///
/// The pool is pinned to a single connection: every connection to an
/// in-memory SQLite database would otherwise see its own empty database.
pub async fn setup_test_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.min_connections(1).max_connections(1).sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    migrate(&conn).await?;
    Ok(conn)
}
