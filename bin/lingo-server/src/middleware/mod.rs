//! HTTP middleware stack.
//!
//! Re-exports the [`Caller`] extractor produced by the auth module.

pub mod auth;
pub mod cors;
pub mod trace;

pub use auth::Caller;
