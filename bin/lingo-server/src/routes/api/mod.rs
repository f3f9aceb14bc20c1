pub mod feed;
pub mod label;
pub mod sentiments;
pub mod translations;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::middleware::Caller;
use crate::state::AppState;

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(translations::router())
        .merge(sentiments::router())
        .merge(feed::router())
        .merge(label::router())
}

#[derive(OpenApi)]
#[openapi()]
pub struct HistoryApi;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = HistoryApi::openapi();
    spec.merge(translations::TranslationsApi::openapi());
    spec.merge(sentiments::SentimentsApi::openapi());
    spec.merge(feed::FeedApi::openapi());
    spec.merge(label::LabelApi::openapi());
    spec
}

/// Unwraps a JSON body. An anonymous caller is unauthorized even when the
/// body is also malformed.
pub(crate) fn accept<T>(
    caller: &Caller,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ServerError> {
    if caller.owner().is_none() {
        return Err(ServerError::Unauthorized);
    }
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
    }
}
