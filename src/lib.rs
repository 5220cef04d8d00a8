//! Todo service: a REST API over a single `Todo` collection plus a client
//! session that mirrors the list for a UI.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use model::Todo;
pub use state::AppState;

/// The full API router with request tracing, ready to serve.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
