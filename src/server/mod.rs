use api::{setup_config, setup_db, setup_router};
use app::seed::prepare_data;
use utils::{create_dev_db, migrate};

/// Connects, migrates, prepares seed data and serves until the listener
/// fails.
pub async fn run() -> anyhow::Result<()> {
    let config = setup_config()?;

    create_dev_db(&config.db_url);
    let conn = setup_db(&config.db_url).await?;
    migrate(&conn).await?;

    prepare_data(&conn, &config.candidates_dir).await;

    let listener = tokio::net::TcpListener::bind(config.get_server_url()).await?;
    tracing::debug!("listening on http://{}", listener.local_addr()?);

    let router = setup_router(config, conn);
    axum::serve(listener, router).await?;
    Ok(())
}
