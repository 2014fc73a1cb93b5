use std::net::SocketAddr;
use std::time::Duration;

use stockwatch::services::{alert_monitor, alert_store::AlertStore, alpha_vantage::AlphaVantageClient};
use stockwatch::{AppState, config, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let store = AlertStore::new();
    let market = AlphaVantageClient::new(
        settings.alphavantage_api_key.clone(),
        Duration::from_secs(settings.fetch_timeout_secs),
    );

    let state = AppState {
        settings: settings.clone(),
        store,
        market,
    };

    // Recurring price check, independent of the request path.
    alert_monitor::spawn_alert_monitor(state.clone());

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
