//! Ingestion payloads and their schema check.
//!
//! Fields are `Option` so that a missing field deserializes and is then
//! reported by [`Validate`] together with every other problem, instead of
//! failing on the first one inside serde. Present values are stored verbatim.

use chrono::{SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::{SentimentRecord, TranslationRecord};
use crate::error::HistoryError;
use crate::identity::OwnerId;
use crate::sentiment::SentimentLabel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTranslation {
    #[validate(required)]
    pub source_language: Option<String>,
    #[validate(required)]
    pub target_language: Option<String>,
    #[validate(required)]
    pub original_text: Option<String>,
    #[validate(required)]
    pub translated_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSentiment {
    #[validate(required)]
    pub text: Option<String>,
    #[validate(required)]
    pub label: Option<SentimentLabel>,
    #[validate(required, range(min = -1.0, max = 1.0))]
    pub score: Option<f64>,
    #[validate(range(min = 0.0))]
    pub magnitude: Option<f64>,
    #[validate(required)]
    pub emoji: Option<String>,
    #[validate(required)]
    pub language: Option<String>,
}

impl NewTranslation {
    pub(crate) fn into_record(self, owner: &OwnerId) -> Result<TranslationRecord, HistoryError> {
        self.validate().map_err(|e| HistoryError::Validation(describe(&e)))?;
        let (Some(source_language), Some(target_language), Some(original_text), Some(translated_text)) = (
            self.source_language,
            self.target_language,
            self.original_text,
            self.translated_text,
        ) else {
            return Err(HistoryError::Validation("missing required fields".into()));
        };
        Ok(TranslationRecord {
            id: new_record_id(),
            owner_id: owner.as_str().to_owned(),
            source_language,
            target_language,
            original_text,
            translated_text,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }
}

impl NewSentiment {
    pub(crate) fn into_record(self, owner: &OwnerId) -> Result<SentimentRecord, HistoryError> {
        self.validate().map_err(|e| HistoryError::Validation(describe(&e)))?;
        let (Some(text), Some(label), Some(score), Some(emoji), Some(language)) =
            (self.text, self.label, self.score, self.emoji, self.language)
        else {
            return Err(HistoryError::Validation("missing required fields".into()));
        };
        Ok(SentimentRecord {
            id: new_record_id(),
            owner_id: owner.as_str().to_owned(),
            text,
            label,
            score,
            magnitude: self.magnitude,
            emoji: Some(emoji),
            language,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }
}

/// Time-ordered, so ids sort in creation order within this process.
fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// `"invalid or missing fields: score, sourceLanguage"`
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, _)| camel_case(&field))
        .collect();
    fields.sort();
    format!("invalid or missing fields: {}", fields.join(", "))
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn owner() -> OwnerId {
        OwnerId::new("u1").unwrap()
    }

    fn full_sentiment() -> NewSentiment {
        NewSentiment {
            text: Some("I love it".into()),
            label: Some(SentimentLabel::VeryPositive),
            score: Some(0.9),
            magnitude: Some(0.9),
            emoji: Some("😍".into()),
            language: Some("en".into()),
        }
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(camel_case("source_language"), "sourceLanguage");
        assert_eq!(camel_case("text"), "text");
    }

    #[test]
    fn translation_missing_fields_are_listed() {
        let payload = NewTranslation {
            source_language: Some("en".into()),
            ..Default::default()
        };
        let Err(HistoryError::Validation(msg)) = payload.into_record(&owner()) else {
            panic!("expected validation failure");
        };
        assert_eq!(
            msg,
            "invalid or missing fields: originalText, targetLanguage, translatedText"
        );
    }

    #[test]
    fn translation_values_are_kept_verbatim() {
        let payload = NewTranslation {
            source_language: Some(" EN ".into()),
            target_language: Some("es".into()),
            original_text: Some("".into()),
            translated_text: Some("  hola  ".into()),
        };
        let record = payload.into_record(&owner()).unwrap();
        assert_eq!(record.source_language, " EN ");
        assert_eq!(record.original_text, "");
        assert_eq!(record.translated_text, "  hola  ");
        assert_eq!(record.owner_id, "u1");
        assert_eq!(record.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn sentiment_magnitude_is_optional() {
        let payload = NewSentiment {
            magnitude: None,
            ..full_sentiment()
        };
        let record = payload.into_record(&owner()).unwrap();
        assert_eq!(record.magnitude, None);
        assert_eq!(record.emoji.as_deref(), Some("😍"));
    }

    #[test]
    fn sentiment_ranges_are_checked() {
        let out_of_range = NewSentiment {
            score: Some(1.5),
            magnitude: Some(-0.1),
            ..full_sentiment()
        };
        let Err(HistoryError::Validation(msg)) = out_of_range.into_record(&owner()) else {
            panic!("expected validation failure");
        };
        assert_eq!(msg, "invalid or missing fields: magnitude, score");
    }

    #[test]
    fn sentiment_emoji_is_required() {
        let payload = NewSentiment {
            emoji: None,
            ..full_sentiment()
        };
        assert!(matches!(
            payload.into_record(&owner()),
            Err(HistoryError::Validation(_))
        ));
    }

    #[test]
    fn payload_uses_camel_case_on_the_wire() {
        let payload: NewTranslation = serde_json::from_value(serde_json::json!({
            "sourceLanguage": "en",
            "targetLanguage": "es",
            "originalText": "hello",
            "translatedText": "hola",
        }))
        .unwrap();
        assert!(payload.validate().is_ok());

        let payload: NewSentiment = serde_json::from_value(serde_json::json!({
            "text": "meh",
            "label": "Neutral",
            "score": 0.0,
            "emoji": "😐",
            "language": "en",
        }))
        .unwrap();
        assert_eq!(payload.label, Some(SentimentLabel::Neutral));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn record_ids_sort_in_creation_order() {
        let a = new_record_id();
        let b = new_record_id();
        assert!(a < b);
    }
}
