use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
///
/// Readiness depends on the database and is served by the shop itself.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
