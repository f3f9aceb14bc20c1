//! Merged activity feed.
//!
//! Both per-kind lists arrive sorted by `(created_at DESC, id DESC)`, so the
//! combined feed is a single linear merge under the same key. Filtering runs
//! after the merge and only drops entries, which keeps relative order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use super::{HistoryService, RecordKind, authorize};
use crate::entities::{SentimentRecord, TranslationRecord};
use crate::error::HistoryError;
use crate::identity::OwnerId;

/// A record tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEntry {
    Translation(TranslationRecord),
    Sentiment(SentimentRecord),
}

impl FeedEntry {
    pub fn kind(&self) -> RecordKind {
        match self {
            FeedEntry::Translation(_) => RecordKind::Translation,
            FeedEntry::Sentiment(_) => RecordKind::Sentiment,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FeedEntry::Translation(r) => &r.id,
            FeedEntry::Sentiment(r) => &r.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FeedEntry::Translation(r) => r.created_at,
            FeedEntry::Sentiment(r) => r.created_at,
        }
    }
}

/// Which kinds the feed shows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedFilter {
    #[default]
    All,
    Translations,
    Sentiments,
}

impl FeedFilter {
    pub fn matches(self, entry: &FeedEntry) -> bool {
        match self {
            FeedFilter::All => true,
            FeedFilter::Translations => entry.kind() == RecordKind::Translation,
            FeedFilter::Sentiments => entry.kind() == RecordKind::Sentiment,
        }
    }

    pub fn apply(self, entries: Vec<FeedEntry>) -> Vec<FeedEntry> {
        if self == FeedFilter::All {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Merge two lists already sorted by `(created_at, id)` descending.
pub fn merge_desc(
    translations: Vec<TranslationRecord>,
    sentiments: Vec<SentimentRecord>,
) -> Vec<FeedEntry> {
    let mut merged = Vec::with_capacity(translations.len() + sentiments.len());
    let mut translations = translations.into_iter().peekable();
    let mut sentiments = sentiments.into_iter().peekable();

    loop {
        let take_translation = match (translations.peek(), sentiments.peek()) {
            (Some(t), Some(s)) => (t.created_at, t.id.as_str()) >= (s.created_at, s.id.as_str()),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_translation {
            translations.next().map(FeedEntry::Translation)
        } else {
            sentiments.next().map(FeedEntry::Sentiment)
        };
        merged.extend(next);
    }
    merged
}

impl HistoryService {
    /// The caller's translations and sentiment analyses as one newest-first
    /// feed, narrowed by `filter`.
    ///
    /// Both kinds are fetched concurrently. If either fetch fails the whole
    /// feed fails with [`HistoryError::PartialFetch`]; a partial feed is
    /// never returned.
    pub async fn feed(
        &self,
        caller: Option<&OwnerId>,
        filter: FeedFilter,
    ) -> Result<Vec<FeedEntry>, HistoryError> {
        let owner = authorize(caller)?;
        let (translations, sentiments) = tokio::join!(
            self.list_translations(Some(owner)),
            self.list_sentiments(Some(owner)),
        );
        let translations =
            translations.map_err(|e| HistoryError::partial(RecordKind::Translation, e))?;
        let sentiments = sentiments.map_err(|e| HistoryError::partial(RecordKind::Sentiment, e))?;
        Ok(filter.apply(merge_desc(translations, sentiments)))
    }
}
