//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, caller resolution, per-request trace id)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `LINGO_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - History routes under `/api`

mod api;
pub mod doc;
mod health;

use axum::http::Uri;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ServerError;
use crate::middleware::{auth, cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .nest("/api", api::router())
        .fallback(not_found);

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(state.clone())))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::resolve_caller,
        ))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("no route for {}", uri.path()))
}
