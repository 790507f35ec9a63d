//! CatalogEvent - typed catalog mutations and their mapping to and from records.

use serde::{Deserialize, Serialize};

use super::{EventRecord, PayloadError};
use crate::book::{Book, BookId};
use crate::error::CatalogError;

/// An effective change to the catalog.
///
/// Updates carry the full record after the patch was merged, so replay never has
/// to re-run the merge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CatalogEvent {
    BookAdded(Book),
    BookUpdated(Book),
    BookDeleted(BookId),
}

impl CatalogEvent {
    pub const BOOK_ADDED: &'static str = "BookAdded";
    pub const BOOK_UPDATED: &'static str = "BookUpdated";
    pub const BOOK_DELETED: &'static str = "BookDeleted";

    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::BookAdded(_) => Self::BOOK_ADDED,
            CatalogEvent::BookUpdated(_) => Self::BOOK_UPDATED,
            CatalogEvent::BookDeleted(_) => Self::BOOK_DELETED,
        }
    }

    pub fn book_id(&self) -> BookId {
        match self {
            CatalogEvent::BookAdded(book) | CatalogEvent::BookUpdated(book) => book.id,
            CatalogEvent::BookDeleted(id) => *id,
        }
    }

    pub fn to_record(&self, sequence: u64) -> Result<EventRecord, PayloadError> {
        match self {
            CatalogEvent::BookAdded(book) | CatalogEvent::BookUpdated(book) => {
                EventRecord::encode(self.name(), book, sequence)
            }
            CatalogEvent::BookDeleted(id) => EventRecord::encode(self.name(), &id.get(), sequence),
        }
    }

    pub fn from_record(record: &EventRecord) -> Result<Self, CatalogError> {
        match record.event_name.as_str() {
            Self::BOOK_ADDED => Ok(CatalogEvent::BookAdded(record.decode()?)),
            Self::BOOK_UPDATED => Ok(CatalogEvent::BookUpdated(record.decode()?)),
            Self::BOOK_DELETED => Ok(CatalogEvent::BookDeleted(BookId(record.decode()?))),
            other => Err(CatalogError::Replay {
                sequence: record.sequence,
                message: format!("unknown event {}", other),
            }),
        }
    }
}
