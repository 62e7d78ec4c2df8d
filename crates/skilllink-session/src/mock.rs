//! Fixed-delay credential backend: the development stand-in for a real
//! auth API.
//!
//! There is no server behind this. Every call suspends for a configured
//! delay (so the UI's loading states behave like they would against a
//! real network) and then fabricates a successful identity. The failure
//! variants of [`AuthError`] are never produced here — they exist for
//! real backends.

use std::time::Duration;

use rand::Rng;
use skilllink_identity::{AuthToken, Role, User, UserId};

use crate::{AuthError, CredentialBackend};

/// Placeholder avatar handed out on login.
const LOGIN_AVATAR: &str =
    "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop";

/// Placeholder avatar handed out on signup.
const SIGNUP_AVATAR: &str =
    "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the simulated round-trip delays.
#[derive(Debug, Clone)]
pub struct MockBackendConfig {
    /// How long `authenticate` suspends before succeeding.
    ///
    /// Default: 1000 ms, the latency the platform has always simulated
    /// for login.
    pub authenticate_delay: Duration,

    /// How long `register` suspends before succeeding.
    ///
    /// Default: 1200 ms — signup is simulated as slightly slower than
    /// login.
    pub register_delay: Duration,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            authenticate_delay: Duration::from_millis(1000),
            register_delay: Duration::from_millis(1200),
        }
    }
}

impl MockBackendConfig {
    /// A config with zero delays. Keeps tests fast without needing to
    /// drive the clock.
    pub fn instant() -> Self {
        Self {
            authenticate_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// MockBackend
// ---------------------------------------------------------------------------

/// A [`CredentialBackend`] that always succeeds after a fixed delay.
///
/// Fabricated identities follow the platform's historical mock format:
/// 9-character base-36 ids, `mock_jwt_token_*` tokens, and a fixed
/// placeholder avatar. On login the display name is derived from the
/// email's local part (`"maria@ngo.org"` → `"maria"`); on signup the
/// form-supplied name is used as-is.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    config: MockBackendConfig,
}

impl MockBackend {
    /// Creates a backend with the given delays.
    pub fn new(config: MockBackendConfig) -> Self {
        Self { config }
    }
}

impl CredentialBackend for MockBackend {
    async fn authenticate(
        &self,
        email: &str,
        _password: &str,
        role: Role,
    ) -> Result<(User, AuthToken), AuthError> {
        tokio::time::sleep(self.config.authenticate_delay).await;

        let user = User {
            id: generate_user_id(),
            email: email.to_owned(),
            name: local_part(email).to_owned(),
            role,
            avatar: Some(LOGIN_AVATAR.to_owned()),
        };
        Ok((user, generate_token()))
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
        role: Role,
    ) -> Result<(User, AuthToken), AuthError> {
        tokio::time::sleep(self.config.register_delay).await;

        let user = User {
            id: generate_user_id(),
            email: email.to_owned(),
            name: name.to_owned(),
            role,
            avatar: Some(SIGNUP_AVATAR.to_owned()),
        };
        Ok((user, generate_token()))
    }
}

// ---------------------------------------------------------------------------
// Fabrication helpers
// ---------------------------------------------------------------------------

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A random base-36 string of the given length.
fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// A fabricated 9-character base-36 user id.
fn generate_user_id() -> UserId {
    UserId(random_base36(9))
}

/// A fabricated token. The `mock_jwt_token_` prefix makes it obvious in
/// the store file that no real credential exchange happened.
fn generate_token() -> AuthToken {
    AuthToken(format!("mock_jwt_token_{}", random_base36(13)))
}

/// The part of an email before the `@`, used as the login display name.
/// An email with no `@` is used whole.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

// =========================================================================
// Tests
// =========================================================================
