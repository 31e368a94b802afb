//! What to answer when no route matched.
//!
//! API consumers must never receive HTML, and browser navigation to a client-side
//! route must receive the SPA shell so the frontend router can take over.

use std::path::{Path, PathBuf};

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::server::error::AppError;

/// Path prefix reserved for the JSON API.
pub const API_PREFIX: &str = "/api";

/// Classification of an unmatched request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Api,
    Other,
}

/// Classifies `path` by a literal, case-sensitive comparison of its first four bytes
/// against `/api`.
///
/// There is no separator check: `/api` and `/api/x` are API paths, and so is
/// `/apiextra`. `/API/x` is not.
pub fn classify(path: &str) -> PathClass {
    if path.starts_with(API_PREFIX) {
        PathClass::Api
    } else {
        PathClass::Other
    }
}

/// Not-found handling, selected once at startup from the static asset probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// No frontend build: every unmatched path is a JSON 404.
    ApiOnly,
    /// Frontend build present: API paths get a JSON 404, everything else gets the
    /// entry document with status 200.
    Spa { entry_document: PathBuf },
}

impl NotFoundPolicy {
    /// Builds the response for an unmatched request.
    pub async fn respond(&self, method: &Method, path: &str) -> Response {
        match self {
            Self::ApiOnly => {
                tracing::info!("Route not found: {} {}", method, path);
                not_found()
            }
            Self::Spa { entry_document } => match classify(path) {
                PathClass::Api => {
                    tracing::info!("API route not found: {} {}", method, path);
                    not_found()
                }
                PathClass::Other => {
                    tracing::debug!("Serving SPA entry document for {} {}", method, path);
                    serve_entry_document(entry_document).await
                }
            },
        }
    }
}

/// `404 {"error": "not found"}`.
pub fn not_found() -> Response {
    AppError::NotFound("not found".to_string()).into_response()
}

async fn serve_entry_document(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("SPA entry document {} is missing", path.display());
            not_found()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn api_prefix_is_matched_literally() {
        assert_eq!(classify("/api"), PathClass::Api);
        assert_eq!(classify("/api/"), PathClass::Api);
        assert_eq!(classify("/api/auth/unknown"), PathClass::Api);
        assert_eq!(classify("/apiextra"), PathClass::Api);
    }

    #[test]
    fn other_paths_are_not_api() {
        assert_eq!(classify(""), PathClass::Other);
        assert_eq!(classify("/"), PathClass::Other);
        assert_eq!(classify("/ap"), PathClass::Other);
        assert_eq!(classify("/API/users"), PathClass::Other);
        assert_eq!(classify("/about/api"), PathClass::Other);
        assert_eq!(classify("/projects/42"), PathClass::Other);
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn api_only_policy_never_serves_html() {
        let policy = NotFoundPolicy::ApiOnly;

        for path in ["/", "/about", "/api/x"] {
            let response = policy.respond(&Method::GET, path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": "not found" })
            );
        }
    }

    #[tokio::test]
    async fn spa_policy_reports_missing_entry_document_as_404() {
        let dir = tempfile::tempdir().unwrap();
        let policy = NotFoundPolicy::Spa {
            entry_document: dir.path().join("index.html"),
        };

        let response = policy.respond(&Method::GET, "/about").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
