//! `VoiceChat` Common Library
//!
//! Platform entity snapshots and the entity resolution error shared by the
//! moderation layer and its callers.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
