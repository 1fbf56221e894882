use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::swaig;
use crate::state::AppState;
use std::sync::Arc;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Protected routes (auth required when enabled)
        .route("/swaig", post(swaig::swaig_handler))
        .layer(TraceLayer::new_for_http())
}
