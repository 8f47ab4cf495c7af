use axum::Json;

pub const HEALTH_MESSAGE: &str = "MoveBrasil API no ar";

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "message": HEALTH_MESSAGE}))
}
