//! Sentiment classification.
//!
//! The client derives a label from the analysis score before submitting a
//! record, and the history view derives a color from the stored label. Both
//! sides must agree, so the thresholds live here and nowhere else.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// One of the five fixed sentiment categories.
///
/// The wire and storage form is the human-readable name, e.g. `"Very Positive"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
pub enum SentimentLabel {
    #[serde(rename = "Very Positive")]
    #[strum(serialize = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    #[strum(serialize = "Very Negative")]
    VeryNegative,
}

/// Display color category of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SentimentColor {
    Green,
    Red,
    Blue,
}

impl SentimentLabel {
    /// Classify a score in `[-1.0, 1.0]`.
    ///
    /// Each band includes its upper bound: `0.6` is `Positive`, `0.2` is
    /// `Neutral`, `-0.2` is `Negative` and `-0.6` is `Very Negative`.
    /// NaN compares false against every threshold and lands in `Very Negative`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            SentimentLabel::VeryPositive
        } else if score > 0.2 {
            SentimentLabel::Positive
        } else if score > -0.2 {
            SentimentLabel::Neutral
        } else if score > -0.6 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "😍",
            SentimentLabel::Positive => "😊",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Negative => "😠",
            SentimentLabel::VeryNegative => "😡",
        }
    }

    pub fn color(self) -> SentimentColor {
        match self {
            SentimentLabel::VeryPositive | SentimentLabel::Positive => SentimentColor::Green,
            SentimentLabel::VeryNegative | SentimentLabel::Negative => SentimentColor::Red,
            SentimentLabel::Neutral => SentimentColor::Blue,
        }
    }
}
