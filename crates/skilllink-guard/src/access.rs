//! The authorization decision and its outcomes.

use skilllink_identity::{Role, User};

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// The guard's verdict for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the protected content.
    Allow,

    /// Don't render; send the user to `target` instead.
    Redirect(RedirectTarget),
}

impl Access {
    /// Returns `true` for [`Access::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Where a rejected navigation is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// No user is signed in → the login view.
    Login,

    /// A user is signed in but the route isn't for their role → the
    /// public landing page.
    Landing,
}

impl RedirectTarget {
    /// The route path for this target.
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Landing => "/",
        }
    }
}

// ---------------------------------------------------------------------------
// authorize
// ---------------------------------------------------------------------------

/// Decides whether `user` may enter a route restricted to `allowed`.
///
/// - Nobody signed in → redirect to login.
/// - Signed in, but the role isn't in `allowed` → redirect to the
///   landing page.
/// - Otherwise → allow.
pub fn authorize(user: Option<&User>, allowed: &[Role]) -> Access {
    let Some(user) = user else {
        return Access::Redirect(RedirectTarget::Login);
    };

    if allowed.contains(&user.role) {
        Access::Allow
    } else {
        tracing::debug!(
            user_id = %user.id,
            role = %user.role,
            ?allowed,
            "route denied for role"
        );
        Access::Redirect(RedirectTarget::Landing)
    }
}

// =========================================================================
// Tests
// =========================================================================
