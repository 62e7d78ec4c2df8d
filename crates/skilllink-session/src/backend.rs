//! Credential exchange hook: how the session layer talks to an auth
//! provider.
//!
//! SkillLink doesn't verify credentials itself — that's the backend's
//! job (a real HTTP API in production, [`MockBackend`](crate::MockBackend)
//! in development). The session manager only cares about the shape of
//! the exchange: credentials go in, a `(User, AuthToken)` pair comes out
//! after some suspension, or an [`AuthError`] explains why not.
//!
//! Swapping the fixed-delay stub for a real HTTP client touches nothing
//! in the session state machine.

use skilllink_identity::{AuthToken, Role, User};

use crate::AuthError;

/// Exchanges credentials for an authenticated identity.
///
/// # Trait bounds
///
/// - `Send + Sync` → the backend can be shared across async tasks.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the session manager holding it.
///
/// # Example
///
/// ```rust
/// use skilllink_session::{AuthError, CredentialBackend};
/// use skilllink_identity::{AuthToken, Role, User, UserId};
///
/// /// Accepts exactly one hard-coded account. Only for tests.
/// struct SingleAccount;
///
/// impl CredentialBackend for SingleAccount {
///     async fn authenticate(
///         &self,
///         email: &str,
///         password: &str,
///         role: Role,
///     ) -> Result<(User, AuthToken), AuthError> {
///         if email != "admin@skilllink.example" || password != "hunter2" {
///             return Err(AuthError::InvalidCredentials(email.to_owned()));
///         }
///         let user = User {
///             id: UserId("admin-1".into()),
///             email: email.to_owned(),
///             name: "admin".to_owned(),
///             role,
///             avatar: None,
///         };
///         Ok((user, AuthToken("fixed-token".into())))
///     }
///
///     async fn register(
///         &self,
///         _email: &str,
///         _password: &str,
///         _name: &str,
///         _role: Role,
///     ) -> Result<(User, AuthToken), AuthError> {
///         Err(AuthError::Network("registration closed".into()))
///     }
/// }
/// ```
pub trait CredentialBackend: Send + Sync + 'static {
    /// Verifies credentials for an existing account.
    ///
    /// Called by [`AuthSession::login`](crate::AuthSession::login). The
    /// caller awaits the result and shows a loading state meanwhile, so
    /// implementations are free to take real network time.
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] — the account/password pair
    ///   was rejected
    /// - [`AuthError::Network`] — the provider was unreachable
    /// - [`AuthError::RateLimited`] — too many attempts
    fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> impl std::future::Future<Output = Result<(User, AuthToken), AuthError>> + Send;

    /// Creates a new account and signs it in.
    ///
    /// Same contract as [`authenticate`](Self::authenticate), with the
    /// display name supplied by the signup form instead of derived.
    fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> impl std::future::Future<Output = Result<(User, AuthToken), AuthError>> + Send;
}
