//! Derived views over a catalog snapshot.
//!
//! Every function here is pure: it reads a slice of books plus scalar parameters
//! and returns a freshly allocated result. Input order is preserved unless the
//! function sorts.

use crate::book::Book;

/// Category sentinel meaning "no category filter". Matched case-sensitively.
pub const ALL_CATEGORIES: &str = "All";

/// Marker appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

/// Books whose category equals `category`, ignoring case.
///
/// `"All"` and the empty string select every book.
pub fn filter_by_category(books: &[Book], category: &str) -> Vec<Book> {
    if category.is_empty() || category == ALL_CATEGORIES {
        return books.to_vec();
    }

    let wanted = category.to_lowercase();
    books
        .iter()
        .filter(|book| book.category.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Books whose title or author contains `term`, ignoring case.
///
/// A blank term selects every book.
pub fn search_by_text(books: &[Book], term: &str) -> Vec<Book> {
    if term.trim().is_empty() {
        return books.to_vec();
    }

    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// The browse page query: category filter first, then text search.
pub fn browse(books: &[Book], category: &str, term: &str) -> Vec<Book> {
    search_by_text(&filter_by_category(books, category), term)
}

/// The `n` highest rated books. Equal ratings keep their input order.
///
/// The store does not validate ratings, so a NaN rating can reach here; those
/// books rank below every numeric rating.
pub fn top_rated(books: &[Book], n: usize) -> Vec<Book> {
    let mut sorted = books.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| {
        a.rating
            .is_nan()
            .cmp(&b.rating.is_nan())
            .then_with(|| b.rating.total_cmp(&a.rating))
    });
    sorted.truncate(n);
    sorted
}

/// Up to `limit` other books in `subject`'s category.
pub fn related_by_category(books: &[Book], subject: &Book, limit: usize) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.category == subject.category && book.id != subject.id)
        .take(limit)
        .cloned()
        .collect()
}

/// Number of books filed exactly under `category`.
pub fn count_in_category(books: &[Book], category: &str) -> usize {
    books.iter().filter(|book| book.category == category).count()
}

/// `text` cut to `max_len` characters plus [`ELLIPSIS`] when it is longer.
pub fn truncate_description(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}
