//! Codec for the persisted user record.
//!
//! The store holds strings; the session layer holds typed values. The
//! [`RecordCodec`] trait is the bridge. The session layer doesn't care
//! HOW records are serialized — a production build could swap JSON for
//! something else without touching the session state machine.

use serde::{Serialize, de::DeserializeOwned};

use crate::IdentityError;

/// Converts values to and from the string form the store persists.
///
/// `Send + Sync + 'static` so a codec can live inside a session manager
/// that async tasks share.
pub trait RecordCodec: Send + Sync + 'static {
    /// Serializes a value into its stored string form.
    ///
    /// # Errors
    /// Returns [`IdentityError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, IdentityError>;

    /// Parses a stored string back into a value.
    ///
    /// # Errors
    /// Returns [`IdentityError::Decode`] if the string is malformed or
    /// doesn't match the expected shape. The session layer treats this
    /// as "no session" and clears the store.
    fn decode<T: DeserializeOwned>(&self, record: &str) -> Result<T, IdentityError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`RecordCodec`] that uses JSON (via `serde_json`).
///
/// JSON keeps the stored record human-readable — you can open the store
/// file and see exactly what session it holds. It is also the format the
/// platform has always persisted, so existing records decode unchanged.
///
/// Behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use skilllink_identity::{JsonCodec, RecordCodec, Role, User, UserId};
///
/// let codec = JsonCodec;
/// let user = User {
///     id: UserId("u1".into()),
///     email: "a@b.com".into(),
///     name: "A".into(),
///     role: Role::Company,
///     avatar: None,
/// };
///
/// let record = codec.encode(&user).unwrap();
/// let decoded: User = codec.decode(&record).unwrap();
/// assert_eq!(user, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl RecordCodec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, IdentityError> {
        serde_json::to_string(value).map_err(IdentityError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, record: &str) -> Result<T, IdentityError> {
        serde_json::from_str(record).map_err(IdentityError::Decode)
    }
}
