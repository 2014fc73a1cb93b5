use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;

// GET /stock/:symbol
//
// The upstream failure reason stays in the logs; callers only see a generic
// error body.
pub async fn get_stock(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    match state.market.fetch_quote(&symbol).await {
        Ok(quote) => Json(quote).into_response(),
        Err(e) => {
            tracing::warn!(symbol = %symbol, "error fetching stock data: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching stock data").into_response()
        }
    }
}
