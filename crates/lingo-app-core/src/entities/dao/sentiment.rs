use chrono::{DateTime, Utc};

use crate::sentiment::SentimentLabel;

/// A row in the `sentiment_analysis` table.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecord {
    pub id: String,
    pub owner_id: String,
    pub text: String,
    pub label: SentimentLabel,
    /// In `[-1.0, 1.0]`.
    pub score: f64,
    /// `None` when the upstream analysis did not report one.
    pub magnitude: Option<f64>,
    pub emoji: Option<String>,
    pub language: String,
    pub created_at: DateTime<Utc>,
}
