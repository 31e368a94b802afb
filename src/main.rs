mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, startup, static_files::StaticAssets,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Server failed: {}", err);
        return Err(err);
    }

    Ok(())
}

/// Resolves configuration, prepares the store and static assets, then serves until
/// the process is stopped.
///
/// Startup is strictly sequential; concurrent request handling only begins once the
/// listener is bound and `axum::serve` takes over.
async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let store = startup::connect_to_database(&config).await?;
    let assets = StaticAssets::probe(&config.static_dir).await;

    let app = router::router(store, &assets).await;

    let listener = startup::bind_listener(&config.port).await?;
    tracing::info!(
        static_assets = assets.is_enabled(),
        "Starting server on :{}",
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
