//! Persistence layer.
//!
//! [`TranslationStore`] and [`SentimentStore`] define the two record
//! collections. [`AnyStore`] implements both over a sqlx `AnyPool`;
//! [`MemoryStore`] is the in-process substitute used by tests. The service
//! only ever sees `Arc<dyn HistoryStore>`, so swapping backends never touches
//! handler or service code.

pub mod dao;
pub mod memory;
pub mod sentiment;
pub mod translation;

pub use dao::{SentimentRecord, TranslationRecord};
pub use memory::MemoryStore;
pub use sentiment::SentimentStore;
pub use translation::TranslationStore;

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::any::{AnyConnectOptions, AnyPoolOptions};

/// Both record collections behind one object-safe handle.
pub trait HistoryStore: TranslationStore + SentimentStore {}

impl<T: TranslationStore + SentimentStore> HistoryStore for T {}

#[derive(Clone, Debug)]
pub struct AnyStore {
    pool: sqlx::Pool<sqlx::Any>,
}

impl AnyStore {
    /// Open (or create) the database at `url` and run pending migrations.
    ///
    /// `url` is any sqlx-compatible URL, e.g. `"sqlite://lingo.db?mode=rwc"`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let options = AnyConnectOptions::from_str(url)?;
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Private in-memory SQLite database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        let options = AnyConnectOptions::from_str("sqlite::memory:")?;
        let pool = AnyPoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

/// Fixed-width UTC form, so text ordering in SQL equals time ordering.
pub(crate) fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    raw.parse::<DateTime<Utc>>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
