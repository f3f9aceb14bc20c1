use chrono::{DateTime, Utc};

/// A row in the `translation_history` table.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRecord {
    pub id: String,
    pub owner_id: String,
    pub source_language: String,
    pub target_language: String,
    pub original_text: String,
    pub translated_text: String,
    pub created_at: DateTime<Utc>,
}
