use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

pub mod alerts_routes;
pub mod home_routes;
pub mod stocks_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = stocks_routes::add_routes(router);

    // The service fronts a separately-served browser UI.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).with_state(state)
}
