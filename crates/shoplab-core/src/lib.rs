//! Cross-cutting HTTP plumbing shared by the shop service: health probes,
//! request ids, tracing setup and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
