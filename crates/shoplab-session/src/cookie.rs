//! Cookie builders for the `user_id` session cookie.
//!
//! Attributes match the legacy shop exactly: path `/`, no `HttpOnly`, no
//! `Secure`, no signature.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use shoplab_domain::id::UserId;
use time::{Duration, OffsetDateTime};

/// Cookie name holding the raw user id.
pub const USER_ID_COOKIE: &str = "user_id";

/// Set the session cookie to the given user id.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use shoplab_domain::id::UserId;
/// use shoplab_session::cookie::{set_session_cookie, USER_ID_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), UserId(7));
/// let cookie = jar.get(USER_ID_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "7");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.http_only(), None);
/// assert_eq!(cookie.max_age(), None);
/// ```
pub fn set_session_cookie(jar: CookieJar, user_id: UserId) -> CookieJar {
    let cookie = Cookie::build((USER_ID_COOKIE, user_id.to_string()))
        .path("/")
        .build();
    jar.add(cookie)
}

/// Expire the session cookie: empty value, Max-Age 0 and an expiry an hour
/// in the past.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use shoplab_domain::id::UserId;
/// use shoplab_session::cookie::{clear_session_cookie, set_session_cookie, USER_ID_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), UserId(1));
/// let jar = clear_session_cookie(jar);
/// let cookie = jar.get(USER_ID_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((USER_ID_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::now_utc() - Duration::hours(1))
        .build();
    jar.add(cookie)
}
