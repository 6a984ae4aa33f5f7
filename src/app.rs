use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{health, prices};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard shell is served from a different origin than this API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/prices", prices::router())
        .layer(cors)
        .with_state(state)
}
