use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub alphavantage_api_key: String,

    /// Seconds between scheduler passes.
    pub check_interval_secs: u64,
    /// Per-request timeout for upstream quote fetches.
    pub fetch_timeout_secs: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    // A blank key is allowed at startup; every fetch then fails with an
    // upstream error instead of the process refusing to boot.
    let alphavantage_api_key =
        env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| String::new());

    let check_interval_secs = env::var("CHECK_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(300);

    let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10);

    Settings {
        host,
        port,
        alphavantage_api_key,
        check_interval_secs,
        fetch_timeout_secs,
    }
}
