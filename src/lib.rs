mod book;
mod catalog;
mod config;
mod cover;
mod error;
mod events;
mod route;
mod submission;

pub mod query;
pub mod validation;
pub mod views;

pub use book::{Book, BookId, BookPatch, NewBook};
pub use catalog::{
    default_categories, seed_books, Catalog, CatalogSnapshot, CatalogStore, InMemoryCatalogStore,
};
pub use config::{CatalogConfig, ConfigError};
pub use cover::{cover_or_default, data_uri, is_image_mime, DEFAULT_COVER_IMAGE};
pub use error::CatalogError;
pub use events::{
    CatalogChanged, CatalogEvent, ChangeKind, ChangeNotifier, EventRecord, PayloadError,
    SubscriptionId, CATALOG_CHANGED,
};
pub use route::Route;
pub use submission::{AddBookForm, BookForm, SubmissionError, SubmissionState, SubmitOutcome};
pub use validation::{validate, Field, FieldError, ValidationErrors};
