use std::path::{Path, PathBuf};

use anyhow::Context as _;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use axum_extra::extract::Query;
use serde::Deserialize;
use tower::ServiceExt as _;
use tower_http::services::ServeFile;

use crate::error::ShopError;
use crate::handlers::{first, non_empty};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LocalImageQuery {
    #[serde(default)]
    pub id: Vec<String>,
}

/// `GET /local-image?id=` — serve `<id>.jpg`, falling back to `<id>.png`,
/// from the images directory.
pub async fn local_image(
    State(state): State<AppState>,
    Query(query): Query<LocalImageQuery>,
    request: Request,
) -> Result<Response, ShopError> {
    let id = non_empty(first(query.id)).ok_or(ShopError::Missing("id parameter"))?;
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShopError::Invalid("id"));
    }

    let path = find_image(&state.images_dir, &id)
        .await?
        .ok_or(ShopError::ImageNotFound)?;

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});
    Ok(response.map(Body::new))
}

/// First existing `<dir>/<id>.jpg` or `<dir>/<id>.png`.
pub async fn find_image(dir: &Path, id: &str) -> Result<Option<PathBuf>, ShopError> {
    for ext in ["jpg", "png"] {
        let candidate = dir.join(format!("{id}.{ext}"));
        if tokio::fs::try_exists(&candidate)
            .await
            .with_context(|| format!("stat {}", candidate.display()))?
        {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
