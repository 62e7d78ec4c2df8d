//! `App` builder and facade: ties the layers together.
//!
//! This is the entry point for embedding SkillLink's session core. It
//! wires store → identity → session → guard the way the platform shell
//! does: one session manager injected with a store and a credential
//! backend, one route table, initialized once at startup.

use skilllink_guard::{Access, RouteTable, dashboard_path};
use skilllink_identity::{JsonCodec, Role, User};
use skilllink_session::{AuthSession, CredentialBackend, SessionKeys};
use skilllink_store::SessionStore;

use crate::SkillLinkError;

/// Builder for configuring and starting an [`App`].
///
/// # Example
///
/// ```rust
/// use skilllink::prelude::*;
/// use skilllink::RouteTable;
/// use skilllink::Role;
///
/// let app = App::builder(
///     MemoryStore::new(),
///     MockBackend::new(MockBackendConfig::instant()),
/// )
/// .routes({
///     let mut table = RouteTable::platform_defaults();
///     table.protect("/reports", &[Role::Admin]);
///     table
/// })
/// .build();
/// assert!(!app.is_loading());
/// ```
pub struct AppBuilder<S, B> {
    store: S,
    backend: B,
    keys: SessionKeys,
    routes: RouteTable,
}

impl<S, B> AppBuilder<S, B>
where
    S: SessionStore,
    B: CredentialBackend,
{
    /// Creates a builder with the platform's default keys and routes.
    pub fn new(store: S, backend: B) -> Self {
        Self {
            store,
            backend,
            keys: SessionKeys::default(),
            routes: RouteTable::platform_defaults(),
        }
    }

    /// Overrides the store keys the session is persisted under.
    pub fn session_keys(mut self, keys: SessionKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Replaces the protected-route table.
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Builds the app and resolves any persisted session.
    ///
    /// After this returns, [`App::is_loading`] is `false` and
    /// [`App::current_user`] reflects whatever the store held.
    pub fn build(self) -> App<S, B> {
        let mut session = AuthSession::new(self.store, self.backend, JsonCodec, self.keys);
        session.initialize();
        App {
            session,
            routes: self.routes,
        }
    }
}

/// The assembled session core: one auth session plus one route table.
///
/// Page controllers hold this (exclusively, or behind a lock) and go
/// through it for everything — they never touch the store or the
/// backend directly.
pub struct App<S, B> {
    session: AuthSession<S, B, JsonCodec>,
    routes: RouteTable,
}

impl<S, B> App<S, B>
where
    S: SessionStore,
    B: CredentialBackend,
{
    /// Starts building an app around a store and a credential backend.
    pub fn builder(store: S, backend: B) -> AppBuilder<S, B> {
        AppBuilder::new(store, backend)
    }

    /// Signs in to an existing account. See
    /// [`AuthSession::login`](skilllink_session::AuthSession::login).
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<&User, SkillLinkError> {
        self.session
            .login(email, password, role)
            .await
            .map_err(SkillLinkError::from)
    }

    /// Creates an account and signs it in. See
    /// [`AuthSession::signup`](skilllink_session::AuthSession::signup).
    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<&User, SkillLinkError> {
        self.session
            .signup(email, password, name, role)
            .await
            .map_err(SkillLinkError::from)
    }

    /// Signs out. Idempotent.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Decides access to `path` for the current user.
    ///
    /// Re-evaluated from live session state on every call — a logout
    /// flips the answer on the very next navigation.
    pub fn navigate(&self, path: &str) -> Access {
        self.routes.resolve(path, self.session.current_user())
    }

    /// The signed-in user, or `None`.
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Where the current user's Dashboard link points, or `None` when
    /// nobody is signed in.
    pub fn dashboard(&self) -> Option<&'static str> {
        self.session.current_user().map(|user| dashboard_path(user.role))
    }

    /// Returns `true` until the persisted session has been resolved.
    /// Always `false` after [`AppBuilder::build`].
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// The protected-route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}
