//! # SkillLink
//!
//! Session, identity, and route-guard plumbing for the SkillLink
//! apprenticeship-placement platform.
//!
//! SkillLink connects job candidates, NGOs, companies, and platform
//! administrators. This workspace implements the client-side core under
//! all of that: who is signed in, how that survives a restart, and
//! which routes the signed-in role may enter. Pages and forms sit on
//! top as consumers.
//!
//! ## Quick Start
//!
//! ```rust
//! use skilllink::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), SkillLinkError> {
//! let mut app = App::builder(
//!     MemoryStore::new(),
//!     MockBackend::new(MockBackendConfig::instant()),
//! )
//! .build();
//!
//! app.signup("maria@helpinghands.org", "secret", "Maria", Role::Ngo).await?;
//! assert!(app.navigate("/ngo-dashboard").is_allowed());
//! # Ok(())
//! # }
//! ```

mod app;
mod error;

pub use app::{App, AppBuilder};
pub use error::SkillLinkError;

pub use skilllink_guard::{Access, RedirectTarget, RouteTable, authorize, dashboard_path};
pub use skilllink_identity::{AuthToken, IdentityError, JsonCodec, Role, User, UserId};
pub use skilllink_session::{
    AuthError, AuthSession, AuthState, CredentialBackend, MockBackend, MockBackendConfig,
    SessionKeys,
};
pub use skilllink_store::{MemoryStore, SessionStore, StoreError};
#[cfg(feature = "file")]
pub use skilllink_store::JsonFileStore;

/// Everything a page controller typically needs, in one import.
pub mod prelude {
    pub use crate::{
        Access, App, AppBuilder, AuthError, MemoryStore, MockBackend, MockBackendConfig,
        RedirectTarget, Role, RouteTable, SkillLinkError, User, dashboard_path,
    };
    #[cfg(feature = "file")]
    pub use crate::JsonFileStore;
}
