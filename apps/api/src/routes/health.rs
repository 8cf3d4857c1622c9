use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Fixed welcome message; never touches the completion service.
pub async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Shipping Cost Comparison API!"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "shipcost-api"
    }))
}
