use migration::{DbErr, Migrator, MigratorTrait, SchemaManager, sea_orm::DatabaseConnection};

const TABLES: [&str; 4] = ["competitions", "candidates", "votes", "ballots"];

/// Applies pending migrations and checks that every voting table exists.
pub async fn migrate(conn: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(conn, None).await?;

    let schema_manager = SchemaManager::new(conn);
    for table in TABLES {
        if !schema_manager.has_table(table).await? {
            return Err(DbErr::Migration(format!(
                "table {table} is missing after migration"
            )));
        }
    }

    tracing::debug!("database schema is up to date");
    Ok(())
}
