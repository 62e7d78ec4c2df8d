//! Session state types: what the manager knows about the current user.

use skilllink_identity::User;

// ---------------------------------------------------------------------------
// SessionKeys
// ---------------------------------------------------------------------------

/// The store keys the session layer writes.
///
/// Two entries make up one logical session: the opaque token and the
/// JSON-encoded user record. The defaults are the names the platform
/// has always used, so existing installations restore their session
/// after an upgrade.
#[derive(Debug, Clone)]
pub struct SessionKeys {
    /// Key holding the opaque auth token.
    pub token: String,
    /// Key holding the serialized user record.
    pub user: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            token: "skilllink_token".to_owned(),
            user: "skilllink_user".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// The session manager's view of the current user.
///
/// A state machine with four states:
///
/// ```text
/// Uninitialized ──(initialize)──→ Loading ──┬──→ Authenticated(User)
///                                           └──→ Anonymous
///
/// Authenticated ──(logout)──→ Anonymous
/// Anonymous ──(login/signup)──→ Authenticated
/// ```
///
/// - **Uninitialized**: `initialize` has not run yet. Callers should
///   treat the session as still loading.
/// - **Loading**: the persisted session is being checked.
/// - **Authenticated**: a user is signed in; the token/record pair is
///   in the store.
/// - **Anonymous**: nobody is signed in; both store keys are absent.
#[derive(Debug, Clone)]
pub enum AuthState {
    /// The persisted session has not been checked yet.
    Uninitialized,

    /// The persisted session is being checked.
    Loading,

    /// A user is signed in.
    Authenticated(User),

    /// Nobody is signed in.
    Anonymous,
}

impl AuthState {
    /// The signed-in user, or `None` in every other state.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Returns `true` while the persisted session has not been resolved.
    ///
    /// Pages use this to show a loading indicator instead of flashing
    /// the logged-out UI during startup.
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Uninitialized | AuthState::Loading)
    }

    /// Returns `true` if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
