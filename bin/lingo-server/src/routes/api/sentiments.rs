use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lingo_app_core::NewSentiment;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::middleware::Caller;
use crate::routes::api::accept;
use crate::schemas::sentiment::SentimentResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(create_sentiment, list_sentiments),
    components(schemas(NewSentiment, SentimentResponse))
)]
pub struct SentimentsApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/user/sentiment", post(create_sentiment).get(list_sentiments))
}

#[utoipa::path(
    post,
    path = "/api/user/sentiment",
    tag = "sentiment",
    request_body = NewSentiment,
    responses(
        (status = 201, description = "Analysis recorded", body = SentimentResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "No caller identity"),
        (status = 500, description = "Storage error"),
    )
)]
pub async fn create_sentiment(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    body: Result<Json<NewSentiment>, JsonRejection>,
) -> Result<(StatusCode, Json<SentimentResponse>), ServerError> {
    let payload = accept(&caller, body)?;
    let record = state
        .history
        .record_sentiment(caller.owner(), payload)
        .await?;
    Ok((StatusCode::CREATED, Json((&record).into())))
}

/// The caller's sentiment analyses, newest first.
#[utoipa::path(
    get,
    path = "/api/user/sentiment",
    tag = "sentiment",
    responses(
        (status = 200, description = "Sentiment history", body = Vec<SentimentResponse>),
        (status = 401, description = "No caller identity"),
        (status = 500, description = "Storage error"),
    )
)]
pub async fn list_sentiments(
    State(state): State<Arc<AppState>>,
    caller: Caller,
) -> Result<Json<Vec<SentimentResponse>>, ServerError> {
    let records = state.history.list_sentiments(caller.owner()).await?;
    Ok(Json(records.iter().map(SentimentResponse::from).collect()))
}
