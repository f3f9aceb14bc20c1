//! Caller resolution.
//!
//! The middleware never rejects a request: it records whatever identity the
//! configured provider resolves, and the history service turns an absent
//! identity into `401 Unauthorized` for every route that needs one.

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use lingo_app_core::OwnerId;
use tracing::debug;

use crate::state::AppState;

/// The resolved caller of the current request, if any.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<OwnerId>);

impl Caller {
    pub fn owner(&self) -> Option<&OwnerId> {
        self.0.as_ref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Caller>().cloned().unwrap_or_default())
    }
}

pub async fn resolve_caller(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let owner = state.identity.resolve(req.headers());
    if owner.is_none() {
        debug!(path = %req.uri().path(), "no caller identity resolved");
    }
    req.extensions_mut().insert(Caller(owner));
    next.run(req).await
}
