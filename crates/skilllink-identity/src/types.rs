//! Core identity types: the authenticated principal and its pieces.
//!
//! These are the structures the session layer keeps in memory and the
//! store persists between runs. The serde attributes pin the persisted
//! JSON shape, because an already-installed app must still be able to
//! read the record a previous version wrote.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::IdentityError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a user.
///
/// Opaque string payload — the credential backend decides the format
/// (the mock backend fabricates 9-character base-36 ids). The newtype
/// keeps it from being mixed up with other strings like emails or
/// tokens in function signatures.
///
/// `#[serde(transparent)]` serializes this as just the inner string,
/// so `UserId("k3x9q2m1a")` becomes `"k3x9q2m1a"` in JSON — the same
/// shape the persisted record has always had.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque session token, correlated 1:1 with the current user.
///
/// The token carries no expiry and no signature — it is whatever the
/// credential backend issued, held and replayed verbatim. Verifying it
/// is the backend's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl AuthToken {
    /// The token as a borrowed string, for handing to the store.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The kind of account a user holds.
///
/// A closed set: every user is exactly one of these, and the role decides
/// which dashboard they land on and which routes they may enter.
///
/// `#[serde(rename_all = "lowercase")]` makes the JSON representation
/// `"ngo"` / `"company"` / `"admin"`, matching the persisted record
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An NGO placing candidates into apprenticeships.
    Ngo,
    /// A company offering apprenticeship positions.
    Company,
    /// A platform administrator.
    Admin,
}

impl Role {
    /// Every role, in declaration order. Handy for building route tables
    /// and signup forms.
    pub const ALL: [Role; 3] = [Role::Ngo, Role::Company, Role::Admin];

    /// The lowercase wire/persisted name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ngo => "ngo",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

/// Parsing is total and explicit: anything outside the closed set is an
/// [`IdentityError::InvalidRole`], never a silent fallback. Role strings
/// arrive from untrusted places (query parameters, stored records), so
/// the one place they become a `Role` must reject the garbage.
impl FromStr for Role {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ngo" => Ok(Role::Ngo),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            other => Err(IdentityError::InvalidRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An authenticated principal.
///
/// This is the record the session layer holds in memory while the user
/// is logged in, and the record the store persists (JSON-encoded) so a
/// restart can restore the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier, issued at login/signup time.
    pub id: UserId,

    /// The email the user signed in with. Not validated beyond the
    /// form-level pattern check upstream.
    pub email: String,

    /// Display name. Login derives it from the email's local part;
    /// signup takes it from the form.
    pub name: String,

    /// Account kind — decides dashboard routing and route access.
    pub role: Role,

    /// Optional avatar URL. Owned by whatever serves the image, not by
    /// this subsystem.
    #[serde(default)]
    pub avatar: Option<String>,
}

// =========================================================================
// Tests
// =========================================================================
