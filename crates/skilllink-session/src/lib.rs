//! Auth session management for SkillLink.
//!
//! This crate owns the lifecycle of the signed-in user:
//!
//! 1. **Credentials** — exchanging email/password for an identity
//!    ([`CredentialBackend`] trait, [`MockBackend`] stub)
//! 2. **Session state** — knowing who is signed in ([`AuthSession`])
//! 3. **Restore** — picking a persisted session back up after a restart
//!    (token + record pair in the [`SessionStore`](skilllink_store::SessionStore))
//!
//! # How it fits in the stack
//!
//! ```text
//! Guard / Pages (above)  ← read the current user, call login/signup/logout
//!     ↕
//! Session Layer (this crate)  ← owns auth state, sole writer of the store
//!     ↕
//! Store + Identity (below)  ← persistence and the User/Role types
//! ```

#![allow(async_fn_in_trait)]

mod backend;
mod error;
mod manager;
mod mock;
mod state;

pub use backend::CredentialBackend;
pub use error::AuthError;
pub use manager::AuthSession;
pub use mock::{MockBackend, MockBackendConfig};
pub use state::{AuthState, SessionKeys};
