//! Database-agnostic building blocks shared by the gateway and the HTTP layer.

pub mod document;
pub mod error;
pub mod flags;
pub mod types;
