//! Catalog - the single source of truth for books and the category set.
//!
//! Readers take a [`CatalogSnapshot`], an immutable shared handle on the catalog as
//! it was when the snapshot was taken. Writers go through a [`CatalogStore`], which
//! replaces the catalog wholesale on every effective mutation, records the change in
//! its history and notifies subscribers.
//!
//! ## Example
//!
//! ```
//! use bookshelf::{BookId, BookPatch, CatalogStore, InMemoryCatalogStore, NewBook};
//!
//! # fn main() -> Result<(), bookshelf::CatalogError> {
//! let store = InMemoryCatalogStore::seeded();
//! let added = store.add_book(NewBook { title: "Hyperion".into(), ..NewBook::default() })?;
//! assert_eq!(added.id, BookId(9));
//!
//! store.update_book(added.id, BookPatch::new().rating(4.0))?;
//! let snapshot = store.get_catalog()?;
//! assert_eq!(snapshot.books()[0].id, added.id);
//! assert_eq!(snapshot.books()[0].rating, 4.0);
//! # Ok(())
//! # }
//! ```

mod in_memory;
mod seed;
mod store;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::book::{Book, BookId};

pub use in_memory::InMemoryCatalogStore;
pub use seed::{default_categories, seed_books};
pub use store::CatalogStore;

/// Ordered books (newest first) plus the known category set.
///
/// The category set is independent of the categories books actually use, and a
/// book's category is not checked against it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn new(books: Vec<Book>, categories: Vec<String>) -> Self {
        Catalog { books, categories }
    }

    /// The eight seed books and six categories every session starts with.
    pub fn seed() -> Self {
        Catalog::new(seed_books(), default_categories())
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.find(id).is_some()
    }

    /// Highest id in use, if any.
    pub fn max_id(&self) -> Option<BookId> {
        self.books.iter().map(|book| book.id).max()
    }

    pub(crate) fn with_book_added(&self, book: Book) -> Catalog {
        let mut books = Vec::with_capacity(self.books.len() + 1);
        books.push(book);
        books.extend(self.books.iter().cloned());
        Catalog::new(books, self.categories.clone())
    }

    /// Replace the record sharing `book.id`. None if no such record exists.
    pub(crate) fn with_book_replaced(&self, book: Book) -> Option<Catalog> {
        let index = self.books.iter().position(|existing| existing.id == book.id)?;
        let books = self
            .books
            .iter()
            .enumerate()
            .map(|(i, existing)| if i == index { book.clone() } else { existing.clone() })
            .collect();
        Some(Catalog::new(books, self.categories.clone()))
    }

    /// Drop the record with `id`, returning it alongside the new catalog.
    pub(crate) fn without_book(&self, id: BookId) -> Option<(Catalog, Book)> {
        let removed = self.find(id)?.clone();
        let books = self
            .books
            .iter()
            .filter(|book| book.id != id)
            .cloned()
            .collect();
        Some((Catalog::new(books, self.categories.clone()), removed))
    }
}

/// Immutable view of the catalog at a given store version.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    version: u64,
    catalog: Arc<Catalog>,
}

impl CatalogSnapshot {
    pub(crate) fn new(version: u64, catalog: Arc<Catalog>) -> Self {
        CatalogSnapshot { version, catalog }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn books(&self) -> &[Book] {
        &self.catalog.books
    }

    pub fn categories(&self) -> &[String] {
        &self.catalog.categories
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.catalog.find(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
