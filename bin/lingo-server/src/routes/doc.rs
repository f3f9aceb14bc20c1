use crate::routes::{api, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "lingo-server",
    description = "Translation and sentiment history API",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(api::api_docs());
    root
}
