//! One-shot startup steps, run in order before the listener opens.

use std::fmt::Display;

use sea_orm::DbErr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::store::{Store, StoreGateway},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` with `sqlx` quieted to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
}

/// Connects to the database described by the configuration.
///
/// Establishes a connection pool using the connection string from configuration. No
/// schema work happens here; see `ensure_schema`. Failure is fatal to startup.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(Store)` - Store gateway over the new pool
/// - `Err(AppError::DbErr)` - Failed to connect to the database
pub async fn connect_to_database(config: &Config) -> Result<Store, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(Store::new(db))
}

/// Opens the TCP listener on all interfaces.
///
/// The port string is not validated beforehand, so an unusable value surfaces here as
/// an I/O error. Failure is fatal to startup.
pub async fn bind_listener(port: &str) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    Ok(listener)
}

/// Creates the `app_user` table if it does not already exist.
///
/// Runs on every process start. The statement is `CREATE TABLE IF NOT EXISTS`, so
/// repeated runs leave exactly one table. A failure here must not stop the server:
/// the health check still works, and another instance may have created the table
/// concurrently. The result is therefore wrapped in `BestEffort` for the caller to
/// log rather than propagate.
pub async fn ensure_schema(store: &Store) -> BestEffort<DbErr> {
    let statement = store.backend().build(&schema::create_app_user_table());

    BestEffort::new(
        "schema bootstrap",
        store.execute(&statement.sql, Vec::new()).await,
    )
}

/// Outcome of a startup step whose failure is logged and then ignored.
///
/// Keeping the error in a named type, instead of discarding it with `let _ =`, makes
/// the non-fatal policy explicit at the call site.
#[must_use = "report the outcome so failures are logged"]
#[derive(Debug)]
pub struct BestEffort<E> {
    step: &'static str,
    outcome: Result<(), E>,
}

impl<E: Display> BestEffort<E> {
    pub fn new(step: &'static str, outcome: Result<(), E>) -> Self {
        Self { step, outcome }
    }

    /// Logs a failure at `warn` and reports whether the step succeeded.
    pub fn report(self) -> bool {
        match self.outcome {
            Ok(()) => {
                tracing::debug!("{} succeeded", self.step);
                true
            }
            Err(err) => {
                tracing::warn!("{} failed, continuing without it: {}", self.step, err);
                false
            }
        }
    }

    /// The underlying outcome, for callers that want to inspect it.
    pub fn into_result(self) -> Result<(), E> {
        self.outcome
    }
}
