use super::{HistoryService, authorize};
use crate::entities::{SentimentRecord, TranslationRecord};
use crate::error::HistoryError;
use crate::identity::OwnerId;

impl HistoryService {
    /// Every translation owned by `caller`, newest first. Empty when none.
    pub async fn list_translations(
        &self,
        caller: Option<&OwnerId>,
    ) -> Result<Vec<TranslationRecord>, HistoryError> {
        let owner = authorize(caller)?;
        Ok(self.store.list_translations(owner.as_str()).await?)
    }

    /// Every sentiment analysis owned by `caller`, newest first. Empty when none.
    pub async fn list_sentiments(
        &self,
        caller: Option<&OwnerId>,
    ) -> Result<Vec<SentimentRecord>, HistoryError> {
        let owner = authorize(caller)?;
        Ok(self.store.list_sentiments(owner.as_str()).await?)
    }
}
