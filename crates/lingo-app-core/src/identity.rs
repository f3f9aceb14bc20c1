//! Caller identity resolution.
//!
//! An [`IdentityProvider`] turns request headers into an [`OwnerId`] or
//! nothing. Providers are pure lookups: they never reject a request
//! themselves, the history service decides what an absent identity means.

use std::collections::HashMap;
use std::fmt;

use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName};
use tracing::warn;

/// Opaque identity of the authenticated caller that owns a record.
///
/// Never empty or blank; the raw value is otherwise kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolves the caller of a request.
pub trait IdentityProvider: Send + Sync + 'static {
    fn resolve(&self, headers: &HeaderMap) -> Option<OwnerId>;
}

/// Trusts an identity header injected by an upstream authentication proxy.
#[derive(Debug, Clone)]
pub struct TrustedHeaderIdentity {
    header: HeaderName,
}

impl TrustedHeaderIdentity {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }
}

impl IdentityProvider for TrustedHeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<OwnerId> {
        headers
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| OwnerId::new(v))
    }
}

/// Maps static bearer tokens to owners.
#[derive(Clone, Default)]
pub struct BearerTokenIdentity {
    tokens: HashMap<String, OwnerId>,
}

impl fmt::Debug for BearerTokenIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenIdentity")
            .field("tokens_count", &self.tokens.len())
            .finish()
    }
}

impl BearerTokenIdentity {
    pub fn new(tokens: impl IntoIterator<Item = (String, OwnerId)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Parse a `token:owner,token:owner` list. Malformed entries are skipped
    /// with a warning.
    pub fn from_pairs(pairs: &str) -> Self {
        let tokens = pairs
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| {
                let parsed = entry.split_once(':').and_then(|(token, owner)| {
                    let token = token.trim();
                    if token.is_empty() {
                        return None;
                    }
                    OwnerId::new(owner.trim()).map(|owner| (token.to_owned(), owner))
                });
                if parsed.is_none() {
                    warn!("ignoring malformed api token entry (expected token:owner)");
                }
                parsed
            });
        Self::new(tokens)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl IdentityProvider for BearerTokenIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<OwnerId> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))?;
        self.tokens.get(token.trim()).cloned()
    }
}
