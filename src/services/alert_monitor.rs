use std::collections::HashMap;
use std::time::Duration;

use tokio::time;

use crate::AppState;
use crate::error::PersistenceError;
use crate::models::Alert;
use crate::services::alert_store::AlertStore;
use crate::services::alpha_vantage::QuoteSource;

#[derive(Debug)]
pub struct TriggeredAlert {
    pub alert: Alert,
    pub price: f64,
}

/// Outcome of one checking pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    pub triggered: Vec<TriggeredAlert>,
    pub failed_symbols: Vec<String>,
}

pub fn spawn_alert_monitor(state: AppState) {
    tokio::spawn(async move {
        let mut interval =
            time::interval(Duration::from_secs(state.settings.check_interval_secs));

        loop {
            interval.tick().await;

            match run_pass(&state.store, &state.market).await {
                Ok(summary) => {
                    // Extension point for real delivery (email/SMS).
                    for hit in &summary.triggered {
                        tracing::info!(
                            id = hit.alert.id,
                            symbol = %hit.alert.symbol,
                            threshold = hit.alert.threshold,
                            price = hit.price,
                            email = %hit.alert.email,
                            "ALERT: price reached threshold"
                        );
                    }
                }
                Err(e) => tracing::error!("alert pass aborted: {e}"),
            }
        }
    });
}

/// One full checking cycle over the stored alerts.
///
/// Quotes are fetched once per distinct symbol and cached for the rest of
/// the pass; a failed fetch fails only the alerts on that symbol. A store
/// read failure aborts the whole pass.
///
/// Alerts are never marked fired, so a crossing alert shows up again on
/// every pass while the price stays at or above its threshold.
pub async fn run_pass<Q: QuoteSource>(
    store: &AlertStore,
    market: &Q,
) -> Result<PassSummary, PersistenceError> {
    let alerts = store.list_all()?;

    let mut quotes: HashMap<String, Option<f64>> = HashMap::new();
    let mut summary = PassSummary::default();

    for alert in alerts {
        let price = match quotes.get(&alert.symbol) {
            Some(cached) => *cached,
            None => {
                let fetched = match market.fetch_quote(&alert.symbol).await {
                    Ok(quote) => Some(quote.price),
                    Err(e) => {
                        tracing::warn!(symbol = %alert.symbol, "quote fetch failed: {e}");
                        summary.failed_symbols.push(alert.symbol.clone());
                        None
                    }
                };
                quotes.insert(alert.symbol.clone(), fetched);
                fetched
            }
        };

        if let Some(price) = price {
            if price >= alert.threshold {
                summary.triggered.push(TriggeredAlert { alert, price });
            }
        }
    }

    Ok(summary)
}
