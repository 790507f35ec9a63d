//! Navigation targets.
//!
//! Views ask for transitions by destination, never by URL. The path forms below
//! exist so a shell can map its own location onto a [`Route`] and back.

use std::fmt;

use crate::book::BookId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Browse page, optionally pre-filtered to a category label as it appeared
    /// in the path.
    Browse { category: Option<String> },
    /// Detail page. The id is kept exactly as received; it is matched against
    /// the catalog when the page resolves.
    BookDetail { id: String },
    AddBook,
    NotFound { path: String },
}

impl Route {
    pub fn browse() -> Self {
        Route::Browse { category: None }
    }

    pub fn browse_category(category: impl Into<String>) -> Self {
        Route::Browse {
            category: Some(category.into()),
        }
    }

    pub fn book(id: BookId) -> Self {
        Route::BookDetail { id: id.to_string() }
    }

    /// Map a path onto a route. Query strings and fragments are ignored; anything
    /// unrecognised becomes [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let location = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["browse"] => Route::browse(),
            ["browse", category] => Route::browse_category(*category),
            ["book", id] => Route::BookDetail { id: id.to_string() },
            ["add-book"] => Route::AddBook,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Browse { category: None } => "/browse".to_string(),
            Route::Browse {
                category: Some(category),
            } => format!("/browse/{}", category),
            Route::BookDetail { id } => format!("/book/{}", id),
            Route::AddBook => "/add-book".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/browse"), Route::browse());
        assert_eq!(Route::parse("/browse/"), Route::browse());
        assert_eq!(Route::parse("/browse/sci-fi"), Route::browse_category("sci-fi"));
        assert_eq!(
            Route::parse("/book/5"),
            Route::BookDetail { id: "5".into() }
        );
        assert_eq!(Route::parse("/add-book?from=home"), Route::AddBook);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/books/5/reviews"),
            Route::NotFound {
                path: "/books/5/reviews".into()
            }
        );
        assert_eq!(
            Route::parse("/browse/fiction/extra"),
            Route::NotFound {
                path: "/browse/fiction/extra".into()
            }
        );
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::browse(),
            Route::browse_category("non-fiction"),
            Route::book(BookId(42)),
            Route::AddBook,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::book(BookId(7)).to_string(), "/book/7");
    }
}
