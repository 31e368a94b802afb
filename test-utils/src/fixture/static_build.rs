//! A throwaway frontend build directory.
//!
//! Mirrors the layout a bundler emits: an entry document and favicon at the root and
//! hashed bundles under `assets/`.

use std::fs;
use tempfile::TempDir;

/// Contents written to `index.html`.
pub const INDEX_HTML: &str =
    "<!doctype html><html><head><title>Portfolio</title></head><body><div id=\"root\"></div></body></html>";

/// Contents written to `favicon.ico`.
pub const FAVICON: &[u8] = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00];

/// Contents written to `assets/app.js`.
pub const APP_JS: &str = "console.log(\"portfolio\");";

/// Creates a temporary directory containing `index.html`, `favicon.ico`, and
/// `assets/app.js`.
///
/// The directory is deleted when the returned `TempDir` is dropped.
///
/// # Returns
/// - `Ok(TempDir)` - Populated build directory
/// - `Err(std::io::Error)` - Failed to create a directory or write a file
pub fn static_build() -> Result<TempDir, std::io::Error> {
    let dir = tempfile::tempdir()?;

    fs::write(dir.path().join("index.html"), INDEX_HTML)?;
    fs::write(dir.path().join("favicon.ico"), FAVICON)?;
    fs::create_dir(dir.path().join("assets"))?;
    fs::write(dir.path().join("assets").join("app.js"), APP_JS)?;

    Ok(dir)
}
