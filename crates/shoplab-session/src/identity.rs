//! Cookie-based identity extractor.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::request::Parts;
use shoplab_domain::id::UserId;

use crate::cookie::USER_ID_COOKIE;

/// Rejection body for requests without a session cookie.
pub const NOT_LOGGED_IN: &str = "not logged in";

/// The user id claimed by the request's `user_id` cookie.
///
/// The claim is trusted as-is. Returns 401 `not logged in` only when the
/// cookie is absent; a non-numeric value becomes user id 0, which later
/// lookups will not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: UserId,
}

/// Read the claimed user id out of a cookie jar, if the cookie is present.
pub fn session_user_id(jar: &CookieJar) -> Option<UserId> {
    jar.get(USER_ID_COOKIE)
        .map(|c| UserId::parse_lenient(c.value()))
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = session_user_id(&CookieJar::from_headers(&parts.headers));

        async move {
            let user_id = user_id.ok_or((StatusCode::UNAUTHORIZED, NOT_LOGGED_IN))?;
            Ok(Self { user_id })
        }
    }
}
