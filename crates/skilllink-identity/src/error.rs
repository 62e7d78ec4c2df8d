//! Error types for the identity layer.

/// Errors that can occur in the identity layer.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// A role string outside the closed `{ngo, company, admin}` set.
    ///
    /// Raised by [`Role::from_str`](crate::Role) — the single place an
    /// untrusted string (query parameter, stored record) becomes a role.
    #[error("unrecognized role: {0:?}")]
    InvalidRole(String),

    /// Serializing a record failed.
    #[cfg(feature = "json")]
    #[error("record encode failed: {0}")]
    Encode(serde_json::Error),

    /// Parsing a stored record failed.
    ///
    /// Common causes: a record written by hand, truncated storage, or a
    /// schema change without a migration.
    #[cfg(feature = "json")]
    #[error("record decode failed: {0}")]
    Decode(serde_json::Error),
}
