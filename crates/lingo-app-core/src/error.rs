//! Domain error type for the history service.

use thiserror::Error;

use crate::history::RecordKind;

/// Failure kinds surfaced by [`crate::HistoryService`].
///
/// Adapter failures are translated 1:1; nothing here is retried.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// No resolvable caller identity.
    #[error("unauthorized")]
    Unauthorized,

    /// A required ingestion field is missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The persistence adapter could not complete the operation.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    /// One of the two merged-feed fetches failed, so the whole feed fails.
    #[error("failed to fetch {kind} history: {source}")]
    PartialFetch {
        kind: RecordKind,
        #[source]
        source: Box<HistoryError>,
    },
}

impl HistoryError {
    pub(crate) fn partial(kind: RecordKind, source: HistoryError) -> Self {
        HistoryError::PartialFetch {
            kind,
            source: Box::new(source),
        }
    }

    /// `true` for failures caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, HistoryError::Unauthorized | HistoryError::Validation(_))
    }
}
