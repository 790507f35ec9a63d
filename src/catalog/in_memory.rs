//! InMemoryCatalogStore - RwLock-backed catalog store living for one session.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use super::{Catalog, CatalogSnapshot, CatalogStore};
use crate::book::{Book, BookId, BookPatch, NewBook};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::events::{
    CatalogChanged, CatalogEvent, ChangeKind, ChangeNotifier, EventRecord, SubscriptionId,
};

struct State {
    catalog: Arc<Catalog>,
    version: u64,
    // None once the highest possible id has been handed out.
    next_id: Option<u64>,
    history: Vec<EventRecord>,
}

impl State {
    fn new(catalog: Catalog) -> Self {
        let next_id = match catalog.max_id() {
            Some(id) => id.get().checked_add(1),
            None => Some(1),
        };
        State {
            catalog: Arc::new(catalog),
            version: 0,
            next_id,
            history: Vec::new(),
        }
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::new(self.version, Arc::clone(&self.catalog))
    }

    /// Install `catalog`, record `event` and bump the version.
    fn commit(
        &mut self,
        catalog: Catalog,
        event: &CatalogEvent,
    ) -> Result<CatalogChanged, CatalogError> {
        let record = event.to_record(self.history.len() as u64 + 1)?;
        self.history.push(record);
        self.catalog = Arc::new(catalog);
        self.version += 1;
        if let CatalogEvent::BookAdded(book) = event {
            self.next_id = self
                .next_id
                .zip(book.id.get().checked_add(1))
                .map(|(next, after)| next.max(after));
        }

        Ok(CatalogChanged {
            version: self.version,
            kind: match event {
                CatalogEvent::BookAdded(_) => ChangeKind::Added,
                CatalogEvent::BookUpdated(_) => ChangeKind::Updated,
                CatalogEvent::BookDeleted(_) => ChangeKind::Deleted,
            },
            book_id: event.book_id(),
        })
    }

    fn apply(&mut self, event: &CatalogEvent) -> Result<CatalogChanged, CatalogError> {
        let catalog = match event {
            CatalogEvent::BookAdded(book) => {
                if self.catalog.contains(book.id) {
                    return Err(CatalogError::Replay {
                        sequence: self.history.len() as u64 + 1,
                        message: format!("book {} already exists", book.id),
                    });
                }
                self.catalog.with_book_added(book.clone())
            }
            CatalogEvent::BookUpdated(book) => self
                .catalog
                .with_book_replaced(book.clone())
                .ok_or_else(|| self.missing(book.id))?,
            CatalogEvent::BookDeleted(id) => {
                self.catalog
                    .without_book(*id)
                    .ok_or_else(|| self.missing(*id))?
                    .0
            }
        };
        self.commit(catalog, event)
    }

    fn missing(&self, id: BookId) -> CatalogError {
        CatalogError::Replay {
            sequence: self.history.len() as u64 + 1,
            message: format!("book {} does not exist", id),
        }
    }
}

/// In-memory catalog store.
///
/// Clone-friendly via Arc: clones share the same catalog, history and listeners,
/// which is how the store is handed to each view.
#[derive(Clone)]
pub struct InMemoryCatalogStore {
    state: Arc<RwLock<State>>,
    notifier: Arc<ChangeNotifier>,
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InMemoryCatalogStore {
    /// Create a store holding `catalog`. New ids continue after the highest seed id.
    ///
    /// A catalog already holding id `u64::MAX` is still readable and editable, but
    /// [`CatalogStore::add_book`] fails with [`CatalogError::IdSpaceExhausted`].
    pub fn new(catalog: Catalog) -> Self {
        InMemoryCatalogStore {
            state: Arc::new(RwLock::new(State::new(catalog))),
            notifier: Arc::new(ChangeNotifier::new()),
        }
    }

    /// Create a store holding the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::new(Catalog::seed())
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.catalog())
    }

    /// Rebuild a store by replaying `history` over the catalog it started from.
    ///
    /// The result has the same books, version and event sequence as the store
    /// that produced `history`. Listeners are not carried over.
    pub fn replay(initial: Catalog, history: &[EventRecord]) -> Result<Self, CatalogError> {
        let mut state = State::new(initial);
        for record in history {
            let event = CatalogEvent::from_record(record)?;
            state.apply(&event)?;
        }
        info!(events = history.len(), version = state.version, "catalog replayed");

        Ok(InMemoryCatalogStore {
            state: Arc::new(RwLock::new(state)),
            notifier: Arc::new(ChangeNotifier::new()),
        })
    }

    /// Every effective mutation so far, oldest first.
    pub fn history(&self) -> Result<Vec<EventRecord>, CatalogError> {
        let state = self
            .state
            .read()
            .map_err(|_| CatalogError::LockPoisoned("history read"))?;
        Ok(state.history.clone())
    }

    fn write<T, F>(&self, operation: &'static str, mutate: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut State) -> Result<(T, Option<CatalogChanged>), CatalogError>,
    {
        let (value, changed) = {
            let mut state = self
                .state
                .write()
                .map_err(|_| CatalogError::LockPoisoned(operation))?;
            mutate(&mut state)?
        };

        // Readers already see the change; listeners are told after the lock is gone.
        if let Some(changed) = changed {
            debug!(
                version = changed.version,
                book_id = %changed.book_id,
                kind = ?changed.kind,
                "catalog changed"
            );
            if let Err(err) = self.notifier.publish(changed) {
                warn!(error = %err, "failed to notify catalog listeners");
            }
        }

        Ok(value)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn get_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        let state = self
            .state
            .read()
            .map_err(|_| CatalogError::LockPoisoned("read"))?;
        Ok(state.snapshot())
    }

    fn add_book(&self, candidate: NewBook) -> Result<Book, CatalogError> {
        let book = self.write("add", |state| {
            let Some(next_id) = state.next_id else {
                return Err(CatalogError::IdSpaceExhausted(BookId(u64::MAX)));
            };
            let book = candidate.admit(BookId(next_id));
            let catalog = state.catalog.with_book_added(book.clone());
            let changed = state.commit(catalog, &CatalogEvent::BookAdded(book.clone()))?;
            Ok((book, Some(changed)))
        })?;

        info!(book_id = %book.id, title = %book.title, "book added");
        Ok(book)
    }

    fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Option<Book>, CatalogError> {
        self.write("update", |state| {
            let Some(existing) = state.catalog.find(id) else {
                debug!(book_id = %id, "update of unknown book ignored");
                return Ok((None, None));
            };
            let mut updated = existing.clone();
            updated.apply(&patch);

            let Some(catalog) = state.catalog.with_book_replaced(updated.clone()) else {
                return Ok((None, None));
            };
            let changed = state.commit(catalog, &CatalogEvent::BookUpdated(updated.clone()))?;
            Ok((Some(updated), Some(changed)))
        })
    }

    fn delete_book(&self, id: BookId) -> Result<Option<Book>, CatalogError> {
        let removed = self.write("delete", |state| {
            let Some((catalog, removed)) = state.catalog.without_book(id) else {
                debug!(book_id = %id, "delete of unknown book ignored");
                return Ok((None, None));
            };
            let changed = state.commit(catalog, &CatalogEvent::BookDeleted(id))?;
            Ok((Some(removed), Some(changed)))
        })?;

        if let Some(book) = &removed {
            info!(book_id = %book.id, title = %book.title, "book deleted");
        }
        Ok(removed)
    }

    fn version(&self) -> Result<u64, CatalogError> {
        let state = self
            .state
            .read()
            .map_err(|_| CatalogError::LockPoisoned("version read"))?;
        Ok(state.version)
    }

    fn subscribe(
        &self,
        listener: Box<dyn Fn(CatalogChanged) + Send + Sync>,
    ) -> Result<SubscriptionId, CatalogError> {
        self.notifier.subscribe(listener)
    }

    fn unsubscribe(&self, id: &SubscriptionId) -> Result<bool, CatalogError> {
        self.notifier.unsubscribe(id)
    }
}
