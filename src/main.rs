use patient_visits::api::{self, ServerError};
use patient_visits::config::{self, Config};
use patient_visits::db::Database;
use patient_visits::visits::init_visit_module;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    patient_visits::init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = Config::from_env()?;
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent).map_err(ServerError::DataDir)?;
    }

    tracing::info!(path = %config.db_path.display(), "Opening database");
    let db = Database::open(&config.db_path)?;

    let controller = init_visit_module(db);
    let server = api::start_server(controller, config.bind_addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}
