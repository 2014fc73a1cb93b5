pub mod alpha_vantage;
pub mod alert_monitor;
pub mod alert_store;
