pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health_check))
        .route("/comments/{subfeddit_id}", get(routes::get_comments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
