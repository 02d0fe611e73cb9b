//! Holds the current snapshot that the sensors read through.

use std::sync::PoisonError;

use crate::prelude::*;

/// Owns the latest snapshot of a configured station.
///
/// Whoever polls the source calls [`Coordinator::update`]; sensors only ever call
/// [`Coordinator::data`] and never keep a snapshot of their own.
#[derive(Debug, Default)]
pub struct Coordinator {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    data: Arc<Snapshot>,
    last_update: Option<DateTime<Local>>,
}

impl Coordinator {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(Inner {
                data: Arc::new(snapshot),
                last_update: Some(Local::now()),
            }),
        }
    }

    /// Gets the current snapshot.
    pub fn data(&self) -> Arc<Snapshot> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).data.clone()
    }

    /// Replaces the snapshot as a whole.
    pub fn update(&self, snapshot: Snapshot) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.data = Arc::new(snapshot);
        inner.last_update = Some(Local::now());
        debug!(
            "Snapshot updated: {} observations, {} alert categories.",
            inner.data.observations.len(),
            inner.data.alerts.len(),
        );
    }

    /// Time of the last update, if there was any.
    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).last_update
    }
}
