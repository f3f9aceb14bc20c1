use lingo_app_core::TranslationRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub id: String,
    pub owner_id: String,
    pub source_language: String,
    pub target_language: String,
    pub original_text: String,
    pub translated_text: String,
    pub created_at: String,
}

impl From<&TranslationRecord> for TranslationResponse {
    fn from(r: &TranslationRecord) -> Self {
        Self {
            id: r.id.clone(),
            owner_id: r.owner_id.clone(),
            source_language: r.source_language.clone(),
            target_language: r.target_language.clone(),
            original_text: r.original_text.clone(),
            translated_text: r.translated_text.clone(),
            created_at: timestamp(&r.created_at),
        }
    }
}
