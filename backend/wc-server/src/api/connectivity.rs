use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

/// GET /api/test - frontend connectivity probe
pub async fn connectivity_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Backend is working",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
