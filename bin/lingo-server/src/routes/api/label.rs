use std::sync::Arc;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::sentiment::{LabelQuery, LabelResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(classify_score), components(schemas(LabelResponse)))]
pub struct LabelApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/sentiment/label", get(classify_score))
}

/// Label, emoji and color for a raw score. Needs no caller identity.
#[utoipa::path(
    get,
    path = "/api/sentiment/label",
    tag = "sentiment",
    params(LabelQuery),
    responses(
        (status = 200, description = "Classification", body = LabelResponse),
        (status = 400, description = "Score missing or outside [-1, 1]"),
    )
)]
pub async fn classify_score(
    query: Result<Query<LabelQuery>, QueryRejection>,
) -> Result<Json<LabelResponse>, ServerError> {
    let Query(LabelQuery { score }) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
        return Err(ServerError::BadRequest(format!(
            "score must be between -1 and 1, got {score}"
        )));
    }
    Ok(Json(LabelResponse::classify(score)))
}
