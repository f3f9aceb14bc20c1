//! History ingestion, per-kind queries and the merged activity feed.
//!
//! [`HistoryService`] is the only component that writes or reads records on
//! behalf of a caller. Every operation takes the caller as
//! `Option<&OwnerId>` and fails with [`HistoryError::Unauthorized`] before
//! touching the store when it is `None`.

mod feed;
mod ingest;
mod payload;
mod query;

pub use feed::{FeedEntry, FeedFilter, merge_desc};
pub use payload::{NewSentiment, NewTranslation};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::entities::HistoryStore;
use crate::error::HistoryError;
use crate::identity::OwnerId;

/// The two record types tracked in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Translation,
    Sentiment,
}

#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn HistoryStore>,
}

impl fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryService").finish_non_exhaustive()
    }
}

impl HistoryService {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }
}

fn authorize(caller: Option<&OwnerId>) -> Result<&OwnerId, HistoryError> {
    caller.ok_or(HistoryError::Unauthorized)
}
