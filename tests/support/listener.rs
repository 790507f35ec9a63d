use std::sync::{Arc, Mutex};

use bookshelf::{CatalogChanged, CatalogStore, SubscriptionId};

/// Collects every notification a store publishes.
pub struct Recorder {
    seen: Arc<Mutex<Vec<CatalogChanged>>>,
    pub id: SubscriptionId,
}

impl Recorder {
    pub fn attach<S: CatalogStore>(store: &S) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store
            .subscribe(Box::new(move |changed: CatalogChanged| sink.lock().unwrap().push(changed)))
            .unwrap();
        Recorder { seen, id }
    }

    pub fn seen(&self) -> Vec<CatalogChanged> {
        self.seen.lock().unwrap().clone()
    }
}
