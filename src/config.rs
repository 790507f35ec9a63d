//! Session configuration: the catalog a session starts from and the knobs the
//! views and the submission flow read.
//!
//! Every field has a default, so a config file only needs the fields it changes:
//!
//! ```json
//! { "submitDelayMs": 0, "categories": ["Fiction", "Poetry"] }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::book::{Book, BookId};
use crate::catalog::{default_categories, seed_books, Catalog};
use crate::cover::DEFAULT_COVER_IMAGE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed book id {0} is used more than once")]
    DuplicateId(BookId),
    #[error("seed book id {0} leaves no room for new ids")]
    IdSpaceExhausted(BookId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub categories: Vec<String>,
    pub seed_books: Vec<Book>,
    /// Cover used when a submitted book has none.
    pub default_cover_image: String,
    /// Simulated latency after a book is added from the form.
    pub submit_delay_ms: u64,
    /// Books shown in the home page's popular section.
    pub popular_count: usize,
    /// Books shown under "More <category> Books" on the detail page.
    pub related_limit: usize,
    /// Characters of description shown on a browse card.
    pub description_preview_len: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            categories: default_categories(),
            seed_books: seed_books(),
            default_cover_image: DEFAULT_COVER_IMAGE.to_string(),
            submit_delay_ms: 1000,
            popular_count: 6,
            related_limit: 3,
            description_preview_len: 100,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            books = config.seed_books.len(),
            categories = config.categories.len(),
            "loaded catalog config"
        );
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// The catalog a session built from this config starts with.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.seed_books.clone(), self.categories.clone())
    }

    fn check(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for book in &self.seed_books {
            if !seen.insert(book.id) {
                return Err(ConfigError::DuplicateId(book.id));
            }
            if book.id.get().checked_add(1).is_none() {
                return Err(ConfigError::IdSpaceExhausted(book.id));
            }
        }
        Ok(())
    }
}
