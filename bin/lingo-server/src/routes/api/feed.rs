use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::middleware::Caller;
use crate::schemas::feed::{FeedItemData, FeedItemResponse, FeedQuery};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(get_feed),
    components(schemas(FeedItemResponse, FeedItemData))
)]
pub struct FeedApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/user/feed", get(get_feed))
}

/// Translations and sentiment analyses in one list, newest first.
///
/// Fails as a whole when either history cannot be read.
#[utoipa::path(
    get,
    path = "/api/user/feed",
    tag = "history",
    params(FeedQuery),
    responses(
        (status = 200, description = "Merged history", body = Vec<FeedItemResponse>),
        (status = 400, description = "Unknown kind"),
        (status = 401, description = "No caller identity"),
        (status = 500, description = "Failed to fetch history"),
    )
)]
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<Vec<FeedItemResponse>>, ServerError> {
    if caller.owner().is_none() {
        return Err(ServerError::Unauthorized);
    }
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let entries = state
        .history
        .feed(caller.owner(), query.kind.unwrap_or_default())
        .await?;
    Ok(Json(entries.iter().map(FeedItemResponse::from).collect()))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use lingo_app_core::{
        MemoryStore, SentimentRecord, SentimentStore, TranslationRecord, TranslationStore,
    };
    use serde_json::{Value, json};

    use crate::routes::testing::*;

    async fn seeded() -> axum::Router {
        let app = app();
        let translation = json!({
            "sourceLanguage": "en",
            "targetLanguage": "de",
            "originalText": "hi",
            "translatedText": "hallo",
        });
        let sentiment = json!({
            "text": "bad",
            "label": "Negative",
            "score": -0.4,
            "emoji": "😠",
            "language": "en",
        });
        let pause = || tokio::time::sleep(std::time::Duration::from_millis(2));
        send(&app, post("/api/user/history", Some("u1"), translation.clone())).await;
        pause().await;
        send(&app, post("/api/user/sentiment", Some("u1"), sentiment)).await;
        pause().await;
        send(&app, post("/api/user/history", Some("u1"), translation)).await;
        app
    }

    fn types(feed: &Value) -> Vec<String> {
        feed.as_array()
            .unwrap()
            .iter()
            .map(|item| item["type"].as_str().unwrap().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn merges_newest_first() {
        let app = seeded().await;
        let res = send(&app, get("/api/user/feed", Some("u1"))).await;
        assert_eq!(res.status(), StatusCode::OK);
        let feed = json_body(res).await;
        assert_eq!(types(&feed), ["translation", "sentiment", "translation"]);

        let stamps: Vec<&str> = feed
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["createdAt"].as_str().unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(feed[1]["data"]["color"], "red");
        assert_eq!(feed[1]["id"], feed[1]["data"]["id"]);
    }

    #[tokio::test]
    async fn kind_filters_the_feed() {
        let app = seeded().await;
        let feed = json_body(send(&app, get("/api/user/feed?kind=sentiments", Some("u1"))).await).await;
        assert_eq!(types(&feed), ["sentiment"]);

        let feed =
            json_body(send(&app, get("/api/user/feed?kind=translations", Some("u1"))).await).await;
        assert_eq!(types(&feed), ["translation", "translation"]);

        let feed = json_body(send(&app, get("/api/user/feed?kind=all", Some("u1"))).await).await;
        assert_eq!(feed.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn unknown_kind_is_bad_request() {
        let app = seeded().await;
        let res = send(&app, get("/api/user/feed?kind=everything", Some("u1"))).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn other_owner_sees_empty_feed() {
        let app = seeded().await;
        let feed = json_body(send(&app, get("/api/user/feed", Some("u2"))).await).await;
        assert_eq!(feed, json!([]));
    }

    #[tokio::test]
    async fn anonymous_caller_is_rejected() {
        let app = seeded().await;
        let res = send(&app, get("/api/user/feed?kind=bogus", None)).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    /// Serves translations but fails every sentiment read.
    #[derive(Clone, Default)]
    struct BrokenSentiments(MemoryStore);

    #[async_trait]
    impl TranslationStore for BrokenSentiments {
        async fn insert_translation(&self, record: &TranslationRecord) -> Result<(), sqlx::Error> {
            self.0.insert_translation(record).await
        }

        async fn list_translations(
            &self,
            owner_id: &str,
        ) -> Result<Vec<TranslationRecord>, sqlx::Error> {
            self.0.list_translations(owner_id).await
        }
    }

    #[async_trait]
    impl SentimentStore for BrokenSentiments {
        async fn insert_sentiment(&self, record: &SentimentRecord) -> Result<(), sqlx::Error> {
            self.0.insert_sentiment(record).await
        }

        async fn list_sentiments(&self, _owner_id: &str) -> Result<Vec<SentimentRecord>, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
    }

    #[tokio::test]
    async fn partial_failure_fails_the_whole_feed() {
        let app = app_with(Arc::new(BrokenSentiments::default()));
        let translation = json!({
            "sourceLanguage": "en",
            "targetLanguage": "de",
            "originalText": "hi",
            "translatedText": "hallo",
        });
        let res = send(&app, post("/api/user/history", Some("u1"), translation)).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = send(&app, get("/api/user/feed", Some("u1"))).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(res).await["error"], "failed to fetch history");
    }
}
