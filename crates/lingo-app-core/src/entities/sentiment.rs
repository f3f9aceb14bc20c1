use std::str::FromStr;

use async_trait::async_trait;

use crate::entities::{AnyStore, dao::SentimentRecord, decode_timestamp, encode_timestamp};
use crate::sentiment::SentimentLabel;

#[async_trait]
pub trait SentimentStore: Send + Sync + 'static {
    /// Persist one record. A successful return means the row is durable.
    async fn insert_sentiment(&self, record: &SentimentRecord) -> Result<(), sqlx::Error>;

    /// Every record of `owner_id`, newest first (`created_at DESC, id DESC`).
    async fn list_sentiments(&self, owner_id: &str) -> Result<Vec<SentimentRecord>, sqlx::Error>;
}

type SentimentRow = (
    String,
    String,
    String,
    String,
    f64,
    Option<f64>,
    Option<String>,
    String,
    String,
);

#[async_trait]
impl SentimentStore for AnyStore {
    async fn insert_sentiment(&self, record: &SentimentRecord) -> Result<(), sqlx::Error> {
        let created_at = encode_timestamp(&record.created_at);
        sqlx::query(
            "INSERT INTO sentiment_analysis \
             (id, owner_id, text, label, score, magnitude, emoji, language, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&record.id)
        .bind(&record.owner_id)
        .bind(&record.text)
        .bind(record.label.as_ref())
        .bind(record.score)
        .bind(record.magnitude)
        .bind(&record.emoji)
        .bind(&record.language)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_sentiments(&self, owner_id: &str) -> Result<Vec<SentimentRecord>, sqlx::Error> {
        let rows: Vec<SentimentRow> = sqlx::query_as(
            "SELECT id, owner_id, text, label, score, magnitude, emoji, language, created_at \
             FROM sentiment_analysis WHERE owner_id = ?1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(
                |(id, owner_id, text, label, score, magnitude, emoji, language, created_at)| {
                    Ok(SentimentRecord {
                        id,
                        owner_id,
                        text,
                        label: SentimentLabel::from_str(&label)
                            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
                        score,
                        magnitude,
                        emoji,
                        language,
                        created_at: decode_timestamp(&created_at)?,
                    })
                },
            )
            .collect()
    }
}
