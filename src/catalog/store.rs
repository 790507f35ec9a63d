//! CatalogStore - the read/write contract views depend on.

use super::CatalogSnapshot;
use crate::book::{Book, BookId, BookPatch, NewBook};
use crate::error::CatalogError;
use crate::events::{CatalogChanged, SubscriptionId};

/// Authoritative holder of the catalog.
///
/// Unknown ids are never an error: updates and deletes of a missing book leave the
/// catalog untouched and report `None`. `Err` is reserved for infrastructure
/// failures such as a poisoned lock.
pub trait CatalogStore: Send + Sync {
    /// The catalog as of now. Later mutations never show through a snapshot.
    fn get_catalog(&self) -> Result<CatalogSnapshot, CatalogError>;

    /// Admit a candidate at the head of the catalog.
    ///
    /// The store assigns the id and sets the rating to 0; every other field is
    /// copied as given. No duplicate or category checks are made here.
    fn add_book(&self, candidate: NewBook) -> Result<Book, CatalogError>;

    /// Merge `patch` over the book with `id`. Returns the updated record.
    fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Option<Book>, CatalogError>;

    /// Remove the book with `id`. Returns the removed record.
    fn delete_book(&self, id: BookId) -> Result<Option<Book>, CatalogError>;

    /// Incremented by every effective mutation.
    fn version(&self) -> Result<u64, CatalogError>;

    /// Register a listener called after every effective mutation.
    fn subscribe(
        &self,
        listener: Box<dyn Fn(CatalogChanged) + Send + Sync>,
    ) -> Result<SubscriptionId, CatalogError>;

    fn unsubscribe(&self, id: &SubscriptionId) -> Result<bool, CatalogError>;

    fn find_book(&self, id: BookId) -> Result<Option<Book>, CatalogError> {
        Ok(self.get_catalog()?.find(id).cloned())
    }
}
