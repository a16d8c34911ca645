//! Test utilities for the shop service.
//!
//! Provides `MockSession` (forged session cookies) and `spawn_upstream`
//! (a loopback HTTP target for the relay). Import from tests only.

pub mod session;
pub mod upstream;
