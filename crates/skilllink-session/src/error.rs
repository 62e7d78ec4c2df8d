//! Error types for the session layer.

use skilllink_identity::IdentityError;
use skilllink_store::StoreError;

/// Errors that can occur during a session operation.
///
/// Login/signup failures carry a reason so pages can render distinct
/// messages instead of a generic "something went wrong". The mock
/// backend never produces the first three variants — they are the
/// taxonomy a real credential backend reports through.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("invalid credentials for {0}")]
    InvalidCredentials(String),

    /// The backend could not be reached or answered garbage.
    #[error("credential backend unreachable: {0}")]
    Network(String),

    /// The backend refused the attempt because of too many recent ones.
    #[error("too many attempts, try again later")]
    RateLimited,

    /// Persisting or clearing the session failed at the store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Encoding or decoding the persisted user record failed.
    #[error(transparent)]
    Record(#[from] IdentityError),
}
