use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,

    // Case kept exactly as the caller supplied it.
    pub symbol: String,

    // Fires when the observed price is at or above this level.
    pub threshold: f64,

    pub email: String,
}
