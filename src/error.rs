use thiserror::Error;

use crate::book::BookId;
use crate::events::PayloadError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("replay error at sequence {sequence}: {message}")]
    Replay { sequence: u64, message: String },
    #[error("no book ids left after {0}")]
    IdSpaceExhausted(BookId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = CatalogError::LockPoisoned("write");
        assert_eq!(err.to_string(), "catalog lock poisoned during write");

        let err = CatalogError::Replay {
            sequence: 3,
            message: "unknown event BookArchived".into(),
        };
        assert_eq!(
            err.to_string(),
            "replay error at sequence 3: unknown event BookArchived"
        );

        let err = CatalogError::IdSpaceExhausted(BookId(u64::MAX));
        assert_eq!(err.to_string(), "no book ids left after 18446744073709551615");
    }

    #[test]
    fn from_payload_error() {
        let err: CatalogError = PayloadError {
            message: "truncated".into(),
        }
        .into();
        assert_eq!(err.to_string(), "payload error: truncated");
    }
}
