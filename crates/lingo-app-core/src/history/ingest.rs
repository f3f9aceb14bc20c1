use tracing::{info, warn};

use super::{HistoryService, RecordKind, authorize};
use crate::entities::{SentimentRecord, TranslationRecord};
use crate::error::HistoryError;
use crate::history::payload::{NewSentiment, NewTranslation};
use crate::identity::OwnerId;
use crate::sentiment::SentimentLabel;

impl HistoryService {
    /// Append one translation record owned by `caller`.
    pub async fn record_translation(
        &self,
        caller: Option<&OwnerId>,
        payload: NewTranslation,
    ) -> Result<TranslationRecord, HistoryError> {
        let owner = authorize(caller)?;
        let record = payload.into_record(owner)?;
        self.store.insert_translation(&record).await?;
        info!(record_id = %record.id, kind = %RecordKind::Translation, "history record created");
        Ok(record)
    }

    /// Append one sentiment record owned by `caller`.
    ///
    /// The label is stored as submitted even when it disagrees with the
    /// score's classification.
    pub async fn record_sentiment(
        &self,
        caller: Option<&OwnerId>,
        payload: NewSentiment,
    ) -> Result<SentimentRecord, HistoryError> {
        let owner = authorize(caller)?;
        let record = payload.into_record(owner)?;
        let expected = SentimentLabel::from_score(record.score);
        if record.label != expected {
            warn!(
                label = %record.label,
                expected = %expected,
                score = record.score,
                "sentiment label does not match score classification"
            );
        }
        self.store.insert_sentiment(&record).await?;
        info!(record_id = %record.id, kind = %RecordKind::Sentiment, "history record created");
        Ok(record)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use tracing_test::traced_test;

    use super::*;
    use crate::entities::{MemoryStore, SentimentStore, TranslationStore};
    use crate::history::testing::FlakyStore;

    fn owner(raw: &str) -> OwnerId {
        OwnerId::new(raw).unwrap()
    }

    fn hello() -> NewTranslation {
        NewTranslation {
            source_language: Some("en".into()),
            target_language: Some("es".into()),
            original_text: Some("hello".into()),
            translated_text: Some("hola".into()),
        }
    }

    fn happy() -> NewSentiment {
        NewSentiment {
            text: Some("what a day".into()),
            label: Some(SentimentLabel::Positive),
            score: Some(0.4),
            magnitude: None,
            emoji: Some("😊".into()),
            language: Some("en".into()),
        }
    }

    #[tokio::test]
    async fn created_translation_is_listed_once_unchanged() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));
        let u1 = owner("u1");

        let created = service.record_translation(Some(&u1), hello()).await.unwrap();
        assert_eq!(created.owner_id, "u1");
        assert_eq!(created.translated_text, "hola");

        let listed = store.list_translations("u1").await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn unauthorized_writes_nothing() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));

        let err = service.record_translation(None, hello()).await.unwrap_err();
        assert!(matches!(err, HistoryError::Unauthorized));
        let err = service.record_sentiment(None, happy()).await.unwrap_err();
        assert!(matches!(err, HistoryError::Unauthorized));

        assert_eq!(store.translation_count(), 0);
        assert_eq!(store.sentiment_count(), 0);
    }

    #[tokio::test]
    async fn unauthorized_wins_over_invalid_payload() {
        let service = HistoryService::new(Arc::new(MemoryStore::new()));
        let err = service
            .record_translation(None, NewTranslation::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryError::Unauthorized));
    }

    #[tokio::test]
    async fn invalid_payload_writes_nothing() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));
        let payload = NewSentiment {
            language: None,
            ..happy()
        };
        let err = service
            .record_sentiment(Some(&owner("u1")), payload)
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryError::Validation(_)));
        assert!(err.is_client_error());
        assert_eq!(store.sentiment_count(), 0);
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let store = FlakyStore {
            fail_translations: true,
            ..Default::default()
        };
        let service = HistoryService::new(Arc::new(store.clone()));
        let err = service
            .record_translation(Some(&owner("u1")), hello())
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryError::Storage(_)));
        assert!(!err.is_client_error());
        assert_eq!(store.inner.translation_count(), 0);
    }

    #[tokio::test]
    async fn created_sentiment_round_trips() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));
        let created = service
            .record_sentiment(Some(&owner("u1")), happy())
            .await
            .unwrap();
        assert_eq!(created.label, SentimentLabel::Positive);
        assert_eq!(created.magnitude, None);
        assert_eq!(store.list_sentiments("u1").await.unwrap(), vec![created]);
    }

    #[tokio::test]
    #[traced_test]
    async fn mismatched_label_is_stored_and_logged() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));
        let payload = NewSentiment {
            label: Some(SentimentLabel::VeryNegative),
            ..happy()
        };
        let created = service
            .record_sentiment(Some(&owner("u1")), payload)
            .await
            .unwrap();
        assert_eq!(created.label, SentimentLabel::VeryNegative);
        assert!(logs_contain("sentiment label does not match score classification"));
    }

    #[tokio::test]
    async fn concurrent_writes_from_one_owner_do_not_conflict() {
        let store = MemoryStore::new();
        let service = HistoryService::new(Arc::new(store.clone()));
        let u1 = owner("u1");
        let (a, b) = tokio::join!(
            service.record_translation(Some(&u1), hello()),
            service.record_translation(Some(&u1), hello()),
        );
        assert_ne!(a.unwrap().id, b.unwrap().id);
        assert_eq!(store.translation_count(), 2);
    }
}
