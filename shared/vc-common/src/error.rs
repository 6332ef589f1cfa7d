//! Entity resolution errors.
//!
//! Raised by whatever resolves platform entities for the caller (the remote
//! platform, a cache, a database). Consumers are expected to treat any of these
//! as "not enough information".

use uuid::Uuid;

/// Failure to resolve an attribute of a platform entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entity no longer exists.
    #[error("Entity not found")]
    NotFound,

    /// The platform could not be reached.
    #[error("Platform unavailable: {0}")]
    Unavailable(String),

    /// The scope does not expose a permission resolver.
    #[error("Scope {0} exposes no permission resolver")]
    NoResolver(Uuid),

    /// A snapshot lacks an attribute the resolver needs.
    #[error("Snapshot is missing {0}")]
    Incomplete(&'static str),
}

/// Result alias for entity resolution.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NotFound.to_string(), "Entity not found");

        let unavailable = Error::Unavailable("gateway timeout".to_string());
        assert!(unavailable.to_string().contains("gateway timeout"));

        let id = Uuid::nil();
        assert!(Error::NoResolver(id).to_string().contains(&id.to_string()));

        assert!(Error::Incomplete("roles").to_string().contains("roles"));
    }
}
