pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::comparison::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {uri}")))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/shipping-cost-comparison/",
            post(handlers::handle_shipping_cost_comparison),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header, with credentials: mirrors the request.
        .layer(CorsLayer::very_permissive())
}
