//! Page models built from a catalog snapshot: what the home, browse and detail
//! pages show, without any markup.

mod browse;
mod detail;
mod home;

pub use browse::{BookCard, BrowseResults, BrowseState};
pub use detail::{resolve_detail, BookDetailView, DetailOutcome, StarBreakdown};
pub use home::{CategoryTile, HomeView};
