use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::error::ShopError;
use crate::handlers::{first, non_empty};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UrlQuery {
    #[serde(default)]
    pub url: Vec<String>,
}

// ── GET /proxy?url= ──────────────────────────────────────────────────────────

/// Fetch any URL on the caller's behalf and hand back what came back.
/// Unrestricted on purpose: this is the lab's SSRF endpoint.
pub async fn proxy(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ShopError> {
    let url = non_empty(first(query.url)).ok_or(ShopError::Missing("url"))?;
    let upstream = state.relay.fetch(&url).await.map_err(ShopError::Fetch)?;
    Ok((upstream.status, upstream.end_to_end_headers(), upstream.body).into_response())
}

// ── GET /image?url= ──────────────────────────────────────────────────────────

/// Fetch an image through this server's own `/proxy`, addressed by the
/// request's `Host` header. Whatever `/proxy` answers is relayed as 200.
pub async fn image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UrlQuery>,
) -> Result<Response, ShopError> {
    let url = non_empty(first(query.url)).ok_or(ShopError::Missing("url"))?;
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let proxy_url = format!("http://{host}/proxy?url={url}");

    let upstream = state
        .relay
        .fetch(&proxy_url)
        .await
        .map_err(ShopError::ProxyFetch)?;

    let mut relayed = HeaderMap::new();
    if let Some(content_type) = upstream.headers.get(header::CONTENT_TYPE) {
        relayed.insert(header::CONTENT_TYPE, content_type.clone());
    }
    Ok((StatusCode::OK, relayed, upstream.body).into_response())
}
