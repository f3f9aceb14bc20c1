use lingo_app_core::{SentimentColor, SentimentLabel, SentimentRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    pub id: String,
    pub owner_id: String,
    pub text: String,
    pub label: SentimentLabel,
    pub score: f64,
    pub magnitude: Option<f64>,
    pub emoji: Option<String>,
    pub language: String,
    /// Display color derived from `label`.
    pub color: SentimentColor,
    pub created_at: String,
}

impl From<&SentimentRecord> for SentimentResponse {
    fn from(r: &SentimentRecord) -> Self {
        Self {
            id: r.id.clone(),
            owner_id: r.owner_id.clone(),
            text: r.text.clone(),
            label: r.label,
            score: r.score,
            magnitude: r.magnitude,
            emoji: r.emoji.clone(),
            language: r.language.clone(),
            color: r.label.color(),
            created_at: timestamp(&r.created_at),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LabelQuery {
    /// Sentiment score in `[-1.0, 1.0]`.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LabelResponse {
    pub score: f64,
    pub label: SentimentLabel,
    pub emoji: String,
    pub color: SentimentColor,
}

impl LabelResponse {
    pub fn classify(score: f64) -> Self {
        let label = SentimentLabel::from_score(score);
        Self {
            score,
            label,
            emoji: label.emoji().to_owned(),
            color: label.color(),
        }
    }
}
