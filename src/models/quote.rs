use serde::{Deserialize, Serialize};

/// A single price observation. Built fresh on every fetch, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,

    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}
