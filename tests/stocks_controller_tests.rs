use std::time::Duration;

use axum::{
    Router,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use stockwatch::{AppState, config, controllers::alerts_controller, controllers::stocks_controller, services};
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut settings = config::load();
    settings.alphavantage_api_key = String::new();

    AppState {
        settings,
        store: services::alert_store::AlertStore::new(),
        market: services::alpha_vantage::AlphaVantageClient::new(
            String::new(),
            Duration::from_secs(1),
        ),
    }
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

#[tokio::test]
async fn get_stock_without_api_key_maps_to_generic_500() {
    let app = Router::new()
        .route("/stock/:symbol", get(stocks_controller::get_stock))
        .with_state(test_state());

    let req = Request::builder()
        .uri("/stock/AAPL")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_body_string(res).await, "Error fetching stock data");
}

#[tokio::test]
async fn get_stock_does_not_mutate_stored_alerts() {
    let state = test_state();
    state.store.insert("AAPL", 150.0, "a@b.com").unwrap();

    let app = Router::new()
        .route("/stock/:symbol", get(stocks_controller::get_stock))
        .route("/get-alerts", get(alerts_controller::get_alerts))
        .with_state(state);

    for _ in 0..2 {
        let req = Request::builder()
            .uri("/stock/AAPL")
            .body(axum::body::Body::empty())
            .unwrap();
        let _ = app.clone().oneshot(req).await.unwrap();
    }

    let req = Request::builder()
        .uri("/get-alerts")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    let body = response_body_string(res).await;
    let alerts: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(alerts.as_array().unwrap().len(), 1);
}
