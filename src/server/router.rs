//! The route table and its installation into Axum.
//!
//! Registrations are described as data first (`route_table`) and then folded into a
//! `Router`. The order of the table is the order of registration: the health check,
//! then the auth routes (preceded by the schema bootstrap), then the static routes,
//! and finally the not-found fallback.

use std::path::PathBuf;

use axum::{
    http::{Method, Uri},
    routing::{get, get_service, post},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::server::{
    controller::{auth, health},
    data::store::Store,
    fallback::NotFoundPolicy,
    startup,
    state::AppState,
    static_files::{StaticAssets, ASSETS_DIR, ENTRY_DOCUMENT, FAVICON},
};

/// How a registration matches request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// Exactly this path.
    Exact(&'static str),
    /// This path and everything below it.
    Prefix(&'static str),
    /// Anything no other registration matched.
    Wildcard,
}

/// Routes owned by the authentication subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRoute {
    Register,
    Login,
}

impl AuthRoute {
    pub const ALL: [AuthRoute; 2] = [AuthRoute::Register, AuthRoute::Login];

    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/api/auth/register",
            Self::Login => "/api/auth/login",
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /health`
    Health,
    /// An authentication endpoint.
    Auth(AuthRoute),
    /// `/assets/*` served from `dir`.
    Assets { dir: PathBuf },
    /// `GET /` served from `file`.
    EntryDocument { file: PathBuf },
    /// `GET /favicon.ico` served from `file`.
    Favicon { file: PathBuf },
    /// Terminal handler for unmatched requests, including a known path requested with a
    /// method it does not serve.
    Fallback(NotFoundPolicy),
}

impl Route {
    pub fn pattern(&self) -> RoutePattern {
        match self {
            Self::Health => RoutePattern::Exact("/health"),
            Self::Auth(route) => RoutePattern::Exact(route.path()),
            Self::Assets { .. } => RoutePattern::Prefix("/assets"),
            Self::EntryDocument { .. } => RoutePattern::Exact("/"),
            Self::Favicon { .. } => RoutePattern::Exact("/favicon.ico"),
            Self::Fallback(_) => RoutePattern::Wildcard,
        }
    }

    /// Whether handlers behind this route read or write the store.
    fn needs_store(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    fn install(self, router: Router<AppState>) -> Router<AppState> {
        match self {
            Self::Health => router.route("/health", get(health::health)),
            Self::Auth(route @ AuthRoute::Register) => {
                router.route(route.path(), post(auth::register))
            }
            Self::Auth(route @ AuthRoute::Login) => router.route(route.path(), post(auth::login)),
            Self::Assets { dir } => router.nest_service("/assets", ServeDir::new(dir)),
            Self::EntryDocument { file } => router.route("/", get_service(ServeFile::new(file))),
            Self::Favicon { file } => {
                router.route("/favicon.ico", get_service(ServeFile::new(file)))
            }
            Self::Fallback(policy) => {
                let method_miss = policy.clone();

                // Applies to every route installed so far, so this entry must stay last.
                router
                    .method_not_allowed_fallback(move |method: Method, uri: Uri| async move {
                        method_miss.respond(&method, uri.path()).await
                    })
                    .fallback(move |method: Method, uri: Uri| async move {
                        policy.respond(&method, uri.path()).await
                    })
            }
        }
    }
}

/// Builds the ordered route table for the given static asset probe result.
///
/// Static routes are only present when assets are enabled. The fallback is always the
/// last entry.
pub fn route_table(assets: &StaticAssets) -> Vec<Route> {
    let mut table = vec![Route::Health];

    table.extend(AuthRoute::ALL.into_iter().map(Route::Auth));

    if let StaticAssets::Enabled { root } = assets {
        table.push(Route::Assets {
            dir: root.join(ASSETS_DIR),
        });
        table.push(Route::EntryDocument {
            file: root.join(ENTRY_DOCUMENT),
        });
        table.push(Route::Favicon {
            file: root.join(FAVICON),
        });
    }

    table.push(Route::Fallback(assets.not_found_policy()));

    table
}

/// Builds the complete application.
///
/// The schema bootstrap runs once, right before the first route that needs the store
/// is registered, so it has completed before the server can receive traffic. Its
/// failure is logged and does not abort startup.
pub async fn router(store: Store, assets: &StaticAssets) -> Router {
    let mut router = Router::new();
    let mut schema_checked = false;

    for route in route_table(assets) {
        if route.needs_store() && !schema_checked {
            startup::ensure_schema(&store).await.report();
            schema_checked = true;
        }

        router = route.install(router);
    }

    router
        .with_state(AppState::new(store))
        .layer(TraceLayer::new_for_http())
}
