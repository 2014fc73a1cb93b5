use std::sync::{Arc, Mutex};

use crate::error::PersistenceError;
use crate::models::Alert;

/// In-memory alert table. Cheap to clone; all clones share the same state.
///
/// Contents are ephemeral and do not survive a restart. Ids are assigned
/// monotonically and never reused. No validation happens here: empty symbols
/// and negative thresholds are stored as given.
#[derive(Clone, Default)]
pub struct AlertStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fully-populated record and returns its new id.
    pub fn insert(
        &self,
        symbol: &str,
        threshold: f64,
        email: &str,
    ) -> Result<u64, PersistenceError> {
        let mut inner = self.inner.lock().map_err(|_| PersistenceError::Poisoned)?;

        inner.next_id += 1;
        let id = inner.next_id;

        inner.alerts.push(Alert {
            id,
            symbol: symbol.to_string(),
            threshold,
            email: email.to_string(),
        });

        Ok(id)
    }

    /// Every stored alert, in insertion order.
    pub fn list_all(&self) -> Result<Vec<Alert>, PersistenceError> {
        let inner = self.inner.lock().map_err(|_| PersistenceError::Poisoned)?;
        Ok(inner.alerts.clone())
    }
}
