use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lingo_app_core::NewTranslation;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::middleware::Caller;
use crate::routes::api::accept;
use crate::schemas::translation::TranslationResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(create_translation, list_translations),
    components(schemas(NewTranslation, TranslationResponse))
)]
pub struct TranslationsApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/user/history", post(create_translation).get(list_translations))
}

#[utoipa::path(
    post,
    path = "/api/user/history",
    tag = "history",
    request_body = NewTranslation,
    responses(
        (status = 201, description = "Translation recorded", body = TranslationResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "No caller identity"),
        (status = 500, description = "Storage error"),
    )
)]
pub async fn create_translation(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Result<Json<NewTranslation>, JsonRejection>,
) -> Result<(StatusCode, Json<TranslationResponse>), ServerError> {
    let payload = accept(&caller, body)?;
    let record = state
        .history
        .record_translation(caller.owner(), payload)
        .await?;
    Ok((StatusCode::CREATED, Json((&record).into())))
}

/// The caller's translations, newest first.
#[utoipa::path(
    get,
    path = "/api/user/history",
    tag = "history",
    responses(
        (status = 200, description = "Translation history", body = Vec<TranslationResponse>),
        (status = 401, description = "No caller identity"),
        (status = 500, description = "Storage error"),
    )
)]
pub async fn list_translations(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<TranslationResponse>>, ServerError> {
    let records = state.history.list_translations(caller.owner()).await?;
    Ok(Json(records.iter().map(TranslationResponse::from).collect()))
}
