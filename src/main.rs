//! Recipe Catalog backend binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recipe_catalog::config::{Config, LogFormat};
use recipe_catalog::import::Importer;
use recipe_catalog::service::RecipeService;
use recipe_catalog::{create_router, db, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Recipe Catalog Backend");
    tracing::info!("Database: {}", config.database);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let store = db::open_store(&config.database).await?;
    let recipes = Arc::new(RecipeService::new(store));

    let importer = Arc::new(Importer::new(config.import_timeout)?);

    let state = AppState { recipes, importer };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
