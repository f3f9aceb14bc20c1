use lingo_app_core::{FeedEntry, FeedFilter, RecordKind};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::sentiment::SentimentResponse;
use super::timestamp;
use super::translation::TranslationResponse;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// `all` (default), `translations` or `sentiments`.
    pub kind: Option<FeedFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FeedItemData {
    Translation(TranslationResponse),
    Sentiment(SentimentResponse),
}

/// One entry of the merged feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub data: FeedItemData,
    pub created_at: String,
}

impl From<&FeedEntry> for FeedItemResponse {
    fn from(entry: &FeedEntry) -> Self {
        let data = match entry {
            FeedEntry::Translation(r) => FeedItemData::Translation(r.into()),
            FeedEntry::Sentiment(r) => FeedItemData::Sentiment(r.into()),
        };
        Self {
            id: entry.id().to_owned(),
            kind: entry.kind(),
            data,
            created_at: timestamp(&entry.created_at()),
        }
    }
}
