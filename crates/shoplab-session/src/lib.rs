//! Session cookie handling for the shop.
//!
//! The session is a single unsigned `user_id` cookie carrying the raw numeric
//! user id. Whoever sends `user_id=1` *is* user 1: there is no signature, no
//! server-side session record and no expiry. This is one of the lab's
//! intentional vulnerabilities (broken authentication / IDOR); do not reuse
//! this crate outside the lab.

pub mod cookie;
pub mod identity;
