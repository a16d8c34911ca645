//! Domain types shared across the shop crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod id;
