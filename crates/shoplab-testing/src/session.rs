//! Forged session cookies.
//!
//! The shop trusts whatever `user_id` cookie it receives, so tests
//! authenticate by simply sending one.

use http::{HeaderName, HeaderValue, header};
use shoplab_domain::id::UserId;
use shoplab_session::cookie::USER_ID_COOKIE;

/// Identity claimed by a test request.
pub struct MockSession {
    pub raw: String,
}

impl MockSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            raw: user_id.to_string(),
        }
    }

    /// Arbitrary cookie value, including non-numeric ones.
    pub fn raw(value: &str) -> Self {
        Self {
            raw: value.to_owned(),
        }
    }

    pub fn cookie_header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("{USER_ID_COOKIE}={}", self.raw))
            .expect("cookie value must be a valid header value");
        (header::COOKIE, value)
    }
}
