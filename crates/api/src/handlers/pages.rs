//! Static pages.

use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;

/// Landing page payload.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn index() -> Json<DataResponse<IndexPage>> {
    Json(DataResponse {
        data: IndexPage {
            title: "Learning Log",
            description: "Learning Log helps you keep track of your learning, \
                          for any topic you're interested in.",
            version: env!("CARGO_PKG_VERSION"),
        },
    })
}
