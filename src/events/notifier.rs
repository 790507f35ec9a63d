//! ChangeNotifier - tells subscribers the catalog changed, after the change is visible.

use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::book::BookId;
use crate::error::CatalogError;

/// Event name every catalog notification is published under.
pub const CATALOG_CHANGED: &str = "CatalogChanged";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}

/// Published after a mutation is visible to readers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogChanged {
    /// Store version after the change.
    pub version: u64,
    pub kind: ChangeKind,
    pub book_id: BookId,
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fans catalog notifications out to listeners.
///
/// Listeners run on the emitter's worker threads; [`publish`](Self::publish) joins
/// them before returning, so a mutation call returns only once every listener has
/// seen the change.
pub struct ChangeNotifier {
    emitter: Mutex<EventEmitter>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        ChangeNotifier {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Result<SubscriptionId, CatalogError>
    where
        F: Fn(CatalogChanged) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| CatalogError::LockPoisoned("subscribe"))?;
        let id = emitter.on(CATALOG_CHANGED, move |changed: CatalogChanged| listener(changed));
        Ok(SubscriptionId(id))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: &SubscriptionId) -> Result<bool, CatalogError> {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| CatalogError::LockPoisoned("unsubscribe"))?;
        Ok(emitter.remove_listener(id.as_str()).is_some())
    }

    pub fn publish(&self, changed: CatalogChanged) -> Result<(), CatalogError> {
        // The emitter lock is released before joining so listeners may subscribe.
        let handles = {
            let mut emitter = self
                .emitter
                .lock()
                .map_err(|_| CatalogError::LockPoisoned("publish"))?;
            emitter.emit(CATALOG_CHANGED, changed.clone())
        };

        for handle in handles {
            if handle.join().is_err() {
                warn!(version = changed.version, "catalog listener panicked");
            }
        }

        Ok(())
    }
}
