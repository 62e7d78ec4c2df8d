//! The protected-route registry and role → dashboard mapping.

use std::collections::HashMap;

use skilllink_identity::{Role, User};

use crate::{Access, authorize};

/// The dashboard a user of this role lands on after signing in.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Ngo => "/ngo-dashboard",
        Role::Company => "/company-dashboard",
        Role::Admin => "/admin-dashboard",
    }
}

/// Which paths are protected, and which roles may enter them.
///
/// Paths not in the table are public: [`resolve`](Self::resolve) allows
/// them for everyone, signed in or not.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Vec<Role>>,
}

impl RouteTable {
    /// An empty table — every path is public.
    pub fn new() -> Self {
        Self::default()
    }

    /// The platform's standard table: each role's dashboard is
    /// restricted to exactly that role.
    pub fn platform_defaults() -> Self {
        let mut table = Self::new();
        for role in Role::ALL {
            table.protect(dashboard_path(role), &[role]);
        }
        table
    }

    /// Restricts `path` to the given roles, replacing any previous
    /// restriction on the same path.
    pub fn protect(&mut self, path: &str, allowed: &[Role]) -> &mut Self {
        self.routes.insert(path.to_owned(), allowed.to_vec());
        self
    }

    /// The allowed roles for `path`, or `None` if the path is public.
    pub fn allowed_roles(&self, path: &str) -> Option<&[Role]> {
        self.routes.get(path).map(Vec::as_slice)
    }

    /// Decides access to `path` for `user`.
    ///
    /// Public paths are always allowed; protected paths go through
    /// [`authorize`].
    pub fn resolve(&self, path: &str, user: Option<&User>) -> Access {
        match self.routes.get(path) {
            Some(allowed) => authorize(user, allowed),
            None => Access::Allow,
        }
    }

    /// The number of protected paths.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no path is protected.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
