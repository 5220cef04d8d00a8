use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

mod health;
pub mod todos;

pub use health::health;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let todo_router = Router::new()
        .route("/", post(todos::routes::create).get(todos::routes::list))
        .route(
            "/{id}",
            put(todos::routes::update).delete(todos::routes::delete),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/todos", todo_router)
}

/// Cross-origin access for exactly one origin and the verbs the API serves.
pub fn cors(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
