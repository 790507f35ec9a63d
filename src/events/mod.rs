//! Catalog events - the record of every effective mutation, and the
//! notifications published to subscribers after each one.
//!
//! Each mutation of the catalog is digested into an [`EventRecord`] whose payload
//! is the bitcode encoding of a [`CatalogEvent`]. Replaying the records over the
//! catalog they started from yields the same catalog again.
//!
//! After the mutation is visible to readers, a [`CatalogChanged`] notification is
//! published to every listener registered through the [`ChangeNotifier`].

mod catalog_event;
mod event_record;
mod notifier;

pub use catalog_event::CatalogEvent;
pub use event_record::{EventRecord, PayloadError};
pub use notifier::{CatalogChanged, ChangeKind, ChangeNotifier, SubscriptionId, CATALOG_CHANGED};
