use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/set-alert", post(alerts_controller::post_set_alert))
        .route("/get-alerts", get(alerts_controller::get_alerts))
}
