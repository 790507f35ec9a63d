//! Home page: category tiles with book counts and the popular books.

use crate::book::Book;
use crate::catalog::CatalogSnapshot;
use crate::query;
use crate::route::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTile {
    pub name: String,
    /// Books filed exactly under this category.
    pub book_count: usize,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub popular: Vec<Book>,
    /// One tile per known category, in category-set order, used or not.
    pub categories: Vec<CategoryTile>,
}

impl HomeView {
    pub fn build(snapshot: &CatalogSnapshot, popular_count: usize) -> Self {
        let books = snapshot.books();
        let categories = snapshot
            .categories()
            .iter()
            .map(|name| CategoryTile {
                name: name.clone(),
                book_count: query::count_in_category(books, name),
                route: Route::browse_category(name.to_lowercase()),
            })
            .collect();

        HomeView {
            popular: query::top_rated(books, popular_count),
            categories,
        }
    }
}
