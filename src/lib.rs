//! Library entrypoint for StockWatch.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod error;
pub mod models;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: services::alert_store::AlertStore,
    pub market: services::alpha_vantage::AlphaVantageClient,
}
