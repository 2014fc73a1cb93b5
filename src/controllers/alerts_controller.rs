use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::AppState;

#[derive(Deserialize)]
pub struct SetAlertRequest {
    pub symbol: String,
    pub threshold: f64,
    pub email: String,
}

// POST /set-alert
pub async fn post_set_alert(
    State(state): State<AppState>,
    Json(req): Json<SetAlertRequest>,
) -> Response {
    // Light hardening only; the store itself accepts anything.
    if req.symbol.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Symbol must not be empty").into_response();
    }
    if !req.threshold.is_finite() {
        return (StatusCode::BAD_REQUEST, "Threshold must be a finite number").into_response();
    }
    if !req.email.contains('@') {
        return (StatusCode::BAD_REQUEST, "Email must contain @").into_response();
    }

    match state.store.insert(&req.symbol, req.threshold, &req.email) {
        Ok(id) => {
            tracing::info!(id, symbol = %req.symbol, threshold = req.threshold, "alert created");
            (StatusCode::OK, "Alert set successfully").into_response()
        }
        Err(e) => {
            tracing::error!("error setting alert: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error setting alert").into_response()
        }
    }
}

// GET /get-alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    match state.store.list_all() {
        Ok(alerts) => Json(alerts).into_response(),
        Err(e) => {
            tracing::error!("error retrieving alerts: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving alerts").into_response()
        }
    }
}
