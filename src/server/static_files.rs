//! Detection of the prebuilt frontend.
//!
//! The build directory is probed once at startup. The result is fixed for the life of
//! the process: files deleted afterwards are not noticed, and a directory created
//! afterwards is not picked up.

use std::path::{Path, PathBuf};

use crate::server::fallback::NotFoundPolicy;

/// Entry document of the single-page application.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Favicon, served at `/favicon.ico`.
pub const FAVICON: &str = "favicon.ico";

/// Subdirectory holding bundled assets, served under `/assets`.
pub const ASSETS_DIR: &str = "assets";

/// Whether a frontend build is available, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticAssets {
    /// No usable build directory; the server answers API requests only.
    Disabled,
    /// A build directory exists at `root`.
    Enabled { root: PathBuf },
}

impl StaticAssets {
    /// Probes `dir` once and decides whether static serving is enabled.
    ///
    /// A missing path, a failed stat, or a path that is not a directory all degrade to
    /// `Disabled` with a log line; none of them fail startup.
    pub async fn probe(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        match tokio::fs::metadata(dir).await {
            Err(err) => {
                tracing::warn!("Static directory not found ({}), serving API only", err);
                Self::Disabled
            }
            Ok(metadata) if !metadata.is_dir() => {
                tracing::warn!(
                    "Static path {} exists but is not a directory, serving API only",
                    dir.display()
                );
                Self::Disabled
            }
            Ok(_) => {
                tracing::info!("Serving static files from {}", dir.display());
                Self::Enabled {
                    root: dir.to_path_buf(),
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    /// The not-found policy matching this probe result.
    pub fn not_found_policy(&self) -> NotFoundPolicy {
        match self {
            Self::Disabled => NotFoundPolicy::ApiOnly,
            Self::Enabled { root } => NotFoundPolicy::Spa {
                entry_document: root.join(ENTRY_DOCUMENT),
            },
        }
    }
}
