//! In-process store with the same ordering contract as [`super::AnyStore`].

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::entities::dao::{SentimentRecord, TranslationRecord};
use crate::entities::{SentimentStore, TranslationStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    translations: Arc<RwLock<Vec<TranslationRecord>>>,
    sentiments: Arc<RwLock<Vec<SentimentRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total translation rows across all owners.
    pub fn translation_count(&self) -> usize {
        self.translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Total sentiment rows across all owners.
    pub fn sentiment_count(&self) -> usize {
        self.sentiments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TranslationStore for MemoryStore {
    async fn insert_translation(&self, record: &TranslationRecord) -> Result<(), sqlx::Error> {
        self.translations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    async fn list_translations(
        &self,
        owner_id: &str,
    ) -> Result<Vec<TranslationRecord>, sqlx::Error> {
        let mut rows: Vec<TranslationRecord> = self
            .translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));
        Ok(rows)
    }
}

#[async_trait]
impl SentimentStore for MemoryStore {
    async fn insert_sentiment(&self, record: &SentimentRecord) -> Result<(), sqlx::Error> {
        self.sentiments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    async fn list_sentiments(&self, owner_id: &str) -> Result<Vec<SentimentRecord>, sqlx::Error> {
        let mut rows: Vec<SentimentRecord> = self
            .sentiments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));
        Ok(rows)
    }
}
