//! lingo-app-core – domain layer of the lingo history service.
//!
//! Owns everything below the HTTP boundary:
//! - [`entities`]: record types, store traits and the sqlx / in-memory stores
//! - [`history`]: ingestion, per-kind queries and the merged activity feed
//! - [`identity`]: caller identity resolution from request headers
//! - [`sentiment`]: score → label classification shared with the client
//!
//! No part of this crate depends on axum; the server crate adapts it.

pub mod entities;
pub mod error;
pub mod history;
pub mod identity;
pub mod sentiment;

pub use entities::{
    AnyStore, HistoryStore, MemoryStore, SentimentRecord, SentimentStore, TranslationRecord,
    TranslationStore,
};
pub use error::HistoryError;
pub use history::{FeedEntry, FeedFilter, HistoryService, NewSentiment, NewTranslation, RecordKind};
pub use identity::{BearerTokenIdentity, IdentityProvider, OwnerId, TrustedHeaderIdentity};
pub use sentiment::{SentimentColor, SentimentLabel};
