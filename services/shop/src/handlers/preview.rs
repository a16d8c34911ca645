use axum::response::Html;
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::handlers::first;

#[derive(Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub text: Vec<String>,
}

/// `GET /preview?text=` — echoes `text` into HTML **without escaping**.
///
/// Intentional reflected XSS for the lab.
pub async fn preview(Query(query): Query<PreviewQuery>) -> Html<String> {
    Html(render_preview(&first(query.text).unwrap_or_default()))
}

pub fn render_preview(text: &str) -> String {
    format!("<h1>Preview</h1><div>{text}</div>")
}
