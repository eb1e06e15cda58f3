use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service name, version and endpoint summary
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Finance API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Personal finance tracker: savings goals, income, expenses, loans and tuition",
        "endpoints": {
            "public": ["POST /register", "POST /login", "GET /health"],
            "dashboard": ["GET /dashboard", "GET /profile"],
            "preferences": ["GET /preferences", "POST /preferences"],
            "savings_goals": ["POST /savings-goals", "DELETE /savings-goals/:id"],
            "income_sources": ["POST /income-sources", "DELETE /income-sources/:id"],
            "expenses": ["POST /expenses", "DELETE /expenses/:id"],
            "loans": ["GET /loans", "POST /loans", "PUT /loans/:id", "DELETE /loans/:id"],
            "tuition": ["GET /tuition", "POST /tuition", "DELETE /tuition/:id"],
            "account": ["POST /change-password", "POST /change-email", "DELETE /delete-account"]
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
