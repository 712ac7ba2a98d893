//! Request handlers.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    Json,
};

use crate::http::docs::{not_found_body, NotFoundBody};
use crate::http::server::AppState;
use crate::service::{EncodeParams, EncodeResponse};

/// `GET /v1/encode?text=...` (also served unversioned at `/encode`).
///
/// The query is read as raw pairs so repeated or malformed parameters never
/// reject the request.
pub async fn encode(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<EncodeResponse> {
    let params = EncodeParams::from_pairs(pairs);
    Json(state.service.encode(&params.text))
}

/// Any unknown path: 404 plus the API description.
pub async fn documentation_fallback(uri: Uri) -> (StatusCode, Json<NotFoundBody>) {
    tracing::debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, Json(not_found_body()))
}
