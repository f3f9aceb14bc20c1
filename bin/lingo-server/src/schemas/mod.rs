pub mod feed;
pub mod sentiment;
pub mod translation;

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamp format used in every response body.
pub(crate) fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
