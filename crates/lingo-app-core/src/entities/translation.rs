use async_trait::async_trait;

use crate::entities::{AnyStore, dao::TranslationRecord, decode_timestamp, encode_timestamp};

#[async_trait]
pub trait TranslationStore: Send + Sync + 'static {
    /// Persist one record. A successful return means the row is durable.
    async fn insert_translation(&self, record: &TranslationRecord) -> Result<(), sqlx::Error>;

    /// Every record of `owner_id`, newest first (`created_at DESC, id DESC`).
    async fn list_translations(&self, owner_id: &str)
    -> Result<Vec<TranslationRecord>, sqlx::Error>;
}

type TranslationRow = (String, String, String, String, String, String, String);

#[async_trait]
impl TranslationStore for AnyStore {
    async fn insert_translation(&self, record: &TranslationRecord) -> Result<(), sqlx::Error> {
        let created_at = encode_timestamp(&record.created_at);
        sqlx::query(
            "INSERT INTO translation_history \
             (id, owner_id, source_language, target_language, original_text, translated_text, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&record.id)
        .bind(&record.owner_id)
        .bind(&record.source_language)
        .bind(&record.target_language)
        .bind(&record.original_text)
        .bind(&record.translated_text)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_translations(
        &self,
        owner_id: &str,
    ) -> Result<Vec<TranslationRecord>, sqlx::Error> {
        let rows: Vec<TranslationRow> = sqlx::query_as(
            "SELECT id, owner_id, source_language, target_language, original_text, translated_text, created_at \
             FROM translation_history WHERE owner_id = ?1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(
                |(id, owner_id, source_language, target_language, original_text, translated_text, created_at)| {
                    Ok(TranslationRecord {
                        id,
                        owner_id,
                        source_language,
                        target_language,
                        original_text,
                        translated_text,
                        created_at: decode_timestamp(&created_at)?,
                    })
                },
            )
            .collect()
    }
}
