//! Unified error type for the SkillLink meta-crate.

use skilllink_identity::IdentityError;
use skilllink_session::AuthError;
use skilllink_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `skilllink` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate. The
/// `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum SkillLinkError {
    /// A store-level error (read, write, corrupt snapshot).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An identity-level error (invalid role, record codec).
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A session-level error (credentials, backend, persistence).
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_store_error() {
        let err = StoreError::Write(std::io::Error::other("disk full"));
        let top: SkillLinkError = err.into();
        assert!(matches!(top, SkillLinkError::Store(_)));
        assert!(top.to_string().contains("disk full"));
    }

    #[test]
    fn test_from_identity_error() {
        let err = IdentityError::InvalidRole("wizard".into());
        let top: SkillLinkError = err.into();
        assert!(matches!(top, SkillLinkError::Identity(_)));
        assert!(top.to_string().contains("wizard"));
    }

    #[test]
    fn test_from_auth_error() {
        let err = AuthError::RateLimited;
        let top: SkillLinkError = err.into();
        assert!(matches!(top, SkillLinkError::Auth(_)));
    }
}
