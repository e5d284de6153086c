//! Query helpers over the connection pool, one module per entity.
//!
//! Failure policy: reads log the error and degrade to an empty result or
//! `None`; writes return `None`/`false` so the handler can surface a
//! message without the page render ever seeing a panic.

pub mod blog;
pub mod recipes;
