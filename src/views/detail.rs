//! Book detail page, with a star breakdown and related books.

use crate::book::{Book, BookId};
use crate::catalog::CatalogSnapshot;
use crate::query;
use crate::route::Route;

const STAR_COUNT: u8 = 5;

/// How a rating is drawn out of five stars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(STAR_COUNT))
        };

        StarBreakdown {
            full: rating.floor() as u8,
            half: rating.fract() != 0.0,
            empty: STAR_COUNT - rating.ceil() as u8,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookDetailView {
    pub book: Book,
    pub stars: StarBreakdown,
    /// Other books in the same category.
    pub related: Vec<Book>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailOutcome {
    Show(BookDetailView),
    /// The id did not name a book; send the reader back to browsing.
    Redirect(Route),
}

/// Resolve a detail page for an id taken from a route.
pub fn resolve_detail(
    snapshot: &CatalogSnapshot,
    raw_id: &str,
    related_limit: usize,
) -> DetailOutcome {
    let book = raw_id
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|id| snapshot.find(BookId(id)));

    match book {
        Some(book) => DetailOutcome::Show(BookDetailView {
            book: book.clone(),
            stars: StarBreakdown::from_rating(book.rating),
            related: query::related_by_category(snapshot.books(), book, related_limit),
        }),
        None => DetailOutcome::Redirect(Route::browse()),
    }
}
