//! Shared application state injected into every Axum handler.

use std::fmt;
use std::sync::Arc;

use axum::http::HeaderName;
use lingo_app_core::{
    BearerTokenIdentity, HistoryService, HistoryStore, IdentityProvider, TrustedHeaderIdentity,
};
use tracing::{info, warn};

use crate::config::{AuthMode, Config};

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Record ingestion, queries and the merged feed.
    pub history: HistoryService,
    /// Resolves the caller of each request.
    pub identity: Arc<dyn IdentityProvider>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn HistoryStore>) -> Self {
        let identity = identity_provider(&config);
        Self {
            config: Arc::new(config),
            history: HistoryService::new(store),
            identity,
        }
    }
}

fn identity_provider(config: &Config) -> Arc<dyn IdentityProvider> {
    match config.auth_mode {
        AuthMode::Header => {
            let header = HeaderName::try_from(config.identity_header.as_str()).unwrap_or_else(|e| {
                warn!(
                    header = %config.identity_header,
                    error = %e,
                    "invalid identity header name; falling back to x-user-id"
                );
                HeaderName::from_static("x-user-id")
            });
            info!(header = %header, "resolving callers from trusted header");
            Arc::new(TrustedHeaderIdentity::new(header))
        }
        AuthMode::Token => {
            let tokens = BearerTokenIdentity::from_pairs(&config.api_tokens);
            if tokens.is_empty() {
                warn!("token auth enabled but LINGO_API_TOKENS is empty; every request is unauthorized");
            }
            info!(tokens = tokens.len(), "resolving callers from bearer tokens");
            Arc::new(tokens)
        }
    }
}
