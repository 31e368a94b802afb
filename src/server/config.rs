use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

/// Environment variables consulted for the listen port, highest priority first.
///
/// `PORT` is the variable hosting platforms inject; `APP_PORT` is the
/// application-specific override for local and container deployments.
pub const PORT_SOURCES: [&str; 2] = ["PORT", "APP_PORT"];

/// Port used when none of `PORT_SOURCES` holds a non-empty value.
pub const DEFAULT_PORT: &str = "8080";

/// Frontend build output directory, relative to the working directory.
pub const STATIC_DIR: &str = "./static";

pub struct Config {
    pub database_url: String,

    /// Unvalidated port string; an unusable value fails when the listener binds.
    pub port: String,

    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: resolve_port(|name| std::env::var(name).ok()),
            static_dir: PathBuf::from(STATIC_DIR),
        })
    }
}

/// Returns the first non-empty value among `PORT_SOURCES`, or `DEFAULT_PORT`.
///
/// `lookup` maps a variable name to its value; `Config::from_env` passes the
/// process environment. No range or format validation happens here.
pub fn resolve_port<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    PORT_SOURCES
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}
