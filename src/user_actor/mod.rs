//! User-specific domain logic for the resource actor.

pub mod entity;
pub mod error;

pub use error::*;
