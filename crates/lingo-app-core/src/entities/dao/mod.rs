pub mod sentiment;
pub mod translation;

pub use sentiment::SentimentRecord;
pub use translation::TranslationRecord;
