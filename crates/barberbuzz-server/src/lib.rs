// BarberBuzz server library
// Decision: router assembly lives here so integration tests can drive the
// exact app the binary serves

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;

use std::sync::Arc;

use axum::{middleware, Router};

use auth::SessionService;
use config::AppConfig;
use storage::StorageBackend;

pub use auth::session::SESSION_COOKIE;

/// App state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService>,
    pub db: StorageBackend,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sessions: Arc::new(SessionService::new(&config.session)),
            db: StorageBackend::from_config(config.airtable.as_ref()),
        }
    }
}

/// Build the application router.
///
/// The access gate wraps every route (and the 404 fallback, so page paths
/// without handlers are still policed) and runs before any handler work.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(auth::routes())
        .merge(api::barbers::routes())
        .merge(api::feedback::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::access_gate,
        ))
        .with_state(state)
}
