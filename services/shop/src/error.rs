use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Shop service error variants.
///
/// Bodies are plain text, and the 500 variants carry the raw underlying error
/// into the response. Leaking driver and client errors to the caller is part
/// of the lab (information disclosure).
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid {0}")]
    Invalid(&'static str),
    #[error("cart is empty")]
    EmptyCart,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    UserNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("image not found")]
    ImageNotFound,
    #[error("cannot register: {0:#}")]
    Registration(#[source] anyhow::Error),
    #[error("fetch error: {0:#}")]
    Fetch(#[source] anyhow::Error),
    #[error("proxy err: {0:#}")]
    ProxyFetch(#[source] anyhow::Error),
    #[error("db error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ShopError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing(_) => "MISSING_FIELD",
            Self::Invalid(_) => "INVALID_FIELD",
            Self::EmptyCart => "EMPTY_CART",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::ImageNotFound => "IMAGE_NOT_FOUND",
            Self::Registration(_) => "REGISTRATION_FAILED",
            Self::Fetch(_) => "FETCH_FAILED",
            Self::ProxyFetch(_) => "PROXY_FETCH_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Missing(_) | Self::Invalid(_) | Self::EmptyCart => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::ProductNotFound | Self::ImageNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Registration(_) | Self::Fetch(_) | Self::ProxyFetch(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status();
        // TraceLayer already records method/uri/status; 500s additionally need
        // the error chain to be traceable.
        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "request failed");
        } else {
            tracing::debug!(kind = self.kind(), "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
