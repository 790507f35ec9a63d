//! Browse page: category and search filters over the catalog.

use crate::book::{Book, BookId};
use crate::catalog::CatalogSnapshot;
use crate::query::{self, ALL_CATEGORIES};
use crate::route::Route;

/// Filters chosen on the browse page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseState {
    category: String,
    search: String,
}

impl Default for BrowseState {
    fn default() -> Self {
        BrowseState {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a browse route, pre-selecting its category.
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Browse {
                category: Some(category),
            } if !category.is_empty() => BrowseState {
                category: category.clone(),
                search: String::new(),
            },
            _ => Self::default(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Select a category. The search term is cleared.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.search.clear();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn results(&self, snapshot: &CatalogSnapshot, preview_len: usize) -> BrowseResults {
        let books = query::browse(snapshot.books(), &self.category, &self.search);

        // Show the canonical label when the selection names a known category.
        let label = snapshot
            .categories()
            .iter()
            .find(|known| known.eq_ignore_ascii_case(&self.category))
            .map(String::as_str)
            .unwrap_or(&self.category);

        let heading = if self.category == ALL_CATEGORIES {
            "All Books".to_string()
        } else {
            format!("{} Books", label)
        };
        let summary = format!(
            "{} book{} found",
            books.len(),
            if books.len() == 1 { "" } else { "s" }
        );
        let empty_message = if !books.is_empty() {
            None
        } else if !self.search.is_empty() {
            Some(format!("No books match your search for \"{}\"", self.search))
        } else {
            Some(format!("No books found in the {} category", label))
        };

        BrowseResults {
            heading,
            summary,
            cards: books
                .iter()
                .map(|book| BookCard::new(book, preview_len))
                .collect(),
            empty_message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: f64,
    pub cover_image: String,
    pub description: String,
    pub route: Route,
}

impl BookCard {
    pub fn new(book: &Book, preview_len: usize) -> Self {
        BookCard {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            rating: book.rating,
            cover_image: book.cover_image.clone(),
            description: query::truncate_description(&book.description, preview_len),
            route: Route::book(book.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrowseResults {
    pub heading: String,
    /// e.g. "3 books found".
    pub summary: String,
    pub cards: Vec<BookCard>,
    /// Set only when there are no cards.
    pub empty_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogStore, InMemoryCatalogStore};

    fn snapshot() -> CatalogSnapshot {
        InMemoryCatalogStore::seeded().get_catalog().unwrap()
    }

    #[test]
    fn default_shows_everything() {
        let results = BrowseState::new().results(&snapshot(), 100);
        assert_eq!(results.heading, "All Books");
        assert_eq!(results.summary, "8 books found");
        assert_eq!(results.cards.len(), 8);
        assert!(results.empty_message.is_none());
    }

    #[test]
    fn route_category_preselects_and_uses_known_label() {
        let state = BrowseState::for_route(&Route::parse("/browse/sci-fi"));
        assert_eq!(state.category(), "sci-fi");

        let results = state.results(&snapshot(), 100);
        assert_eq!(results.heading, "Sci-Fi Books");
        assert_eq!(results.summary, "3 books found");
    }

    #[test]
    fn changing_category_clears_search() {
        let mut state = BrowseState::new();
        state.set_search("dune");
        assert_eq!(state.results(&snapshot(), 100).summary, "1 book found");

        state.set_category("Fiction");
        assert_eq!(state.search(), "");
        assert_eq!(state.results(&snapshot(), 100).summary, "3 books found");
    }

    #[test]
    fn empty_messages() {
        let mut state = BrowseState::new();
        state.set_category("Mystery");
        let results = state.results(&snapshot(), 100);
        assert_eq!(
            results.empty_message.as_deref(),
            Some("No books found in the Mystery category")
        );
        assert_eq!(results.summary, "0 books found");

        state.set_category("Fiction");
        state.set_search("tolkien");
        assert_eq!(
            state.results(&snapshot(), 100).empty_message.as_deref(),
            Some("No books match your search for \"tolkien\"")
        );

        state.clear_filters();
        assert_eq!(state, BrowseState::new());
    }

    #[test]
    fn cards_truncate_descriptions() {
        let results = BrowseState::new().results(&snapshot(), 20);
        let gatsby = results.cards.iter().find(|c| c.id == BookId(1)).unwrap();
        assert_eq!(gatsby.description, "A classic American n...");
        assert_eq!(gatsby.route, Route::parse("/book/1"));
    }
}
