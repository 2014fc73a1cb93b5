use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::models::Quote;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const TIME_SERIES_KEY: &str = "Time Series (5min)";

/// Anything that can produce a current quote for a symbol.
///
/// The alert monitor runs against this trait so its pass logic can be
/// exercised without a network.
pub trait QuoteSource {
    fn fetch_quote(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Quote, UpstreamError>> + Send;
}

#[derive(Clone)]
pub struct AlphaVantageClient {
    http: Client,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("http client");

        Self { http, api_key }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// One intraday request, no retry, no caching. The most recent entry of
    /// the 5-minute series becomes the quote.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, UpstreamError> {
        if !self.has_key() {
            return Err(UpstreamError::MissingApiKey);
        }

        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", symbol),
                ("interval", "5min"),
                ("outputsize", "compact"),
                ("datatype", "json"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(UpstreamError::Status(res.status()));
        }

        let body: Value = res.json().await?;
        parse_quote(&body)
    }
}

impl QuoteSource for AlphaVantageClient {
    fn fetch_quote(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Quote, UpstreamError>> + Send {
        AlphaVantageClient::fetch_quote(self, symbol)
    }
}

/// Extracts `{price, lastUpdated}` from an intraday payload.
///
/// Series keys are `YYYY-MM-DD HH:MM:SS` timestamps, so the lexicographic
/// maximum is the newest entry regardless of how the provider ordered the
/// object.
pub fn parse_quote(body: &Value) -> Result<Quote, UpstreamError> {
    let series = body
        .get(TIME_SERIES_KEY)
        .and_then(|v| v.as_object())
        .ok_or_else(|| {
            UpstreamError::MalformedPayload(format!("missing {TIME_SERIES_KEY:?} object"))
        })?;

    let (timestamp, values) = series
        .iter()
        .max_by(|a, b| a.0.cmp(b.0))
        .ok_or_else(|| UpstreamError::MalformedPayload("empty time series".to_string()))?;

    let close = values
        .get("4. close")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            UpstreamError::MalformedPayload(format!("no close value at {timestamp}"))
        })?;

    let price: f64 = close.parse().map_err(|_| {
        UpstreamError::MalformedPayload(format!("unparseable close value {close:?}"))
    })?;

    Ok(Quote {
        price,
        last_updated: timestamp.clone(),
    })
}
