//! Identity types for SkillLink.
//!
//! This crate defines who a principal *is*:
//!
//! - **Types** ([`User`], [`Role`], [`UserId`], [`AuthToken`]) — the
//!   authenticated-principal record and its pieces.
//! - **Codec** ([`RecordCodec`] trait, [`JsonCodec`]) — how the user
//!   record is converted to/from the string form the session store holds.
//! - **Errors** ([`IdentityError`]) — unrecognized roles, encode/decode
//!   failures.
//!
//! # Architecture
//!
//! The identity layer sits between the store (opaque strings) and the
//! session layer (typed state). It doesn't know about persistence or
//! login flows — it only knows what a user looks like and how to
//! serialize one.
//!
//! ```text
//! Store (strings) → Identity (User record) → Session (auth state)
//! ```

mod codec;
mod error;
mod types;

#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use codec::RecordCodec;
pub use error::IdentityError;
pub use types::{AuthToken, Role, User, UserId};
