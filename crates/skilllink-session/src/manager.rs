//! The auth session manager: owns the current-user state.
//!
//! This is the central piece of the session layer. It's responsible for:
//! - Restoring a persisted session at startup
//! - Exchanging credentials through the configured backend
//! - Persisting the token/record pair on login and signup
//! - Clearing everything on logout
//!
//! # Concurrency note
//!
//! `AuthSession` is NOT internally locked. It's owned by a single UI
//! task and, when shared, wrapped in a mutex at a higher level. Every
//! mutating operation takes `&mut self`, so a double-submitted login
//! cannot overlap an in-flight one on the same manager — the second
//! call waits for the exclusive borrow and then runs, overwriting the
//! first's session like any later login would.

use skilllink_identity::{AuthToken, RecordCodec, Role, User};
use skilllink_store::SessionStore;

use crate::{AuthError, AuthState, CredentialBackend, SessionKeys};

/// Owns the in-memory auth state and is the sole writer of the session
/// store's token and user-record keys.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ initialize() ──→ login()/signup() ──→ logout()
///   │             │                 │                 │
///   ▼             ▼                 ▼                 ▼
/// [Uninitialized] [Anonymous or   [Authenticated]  [Anonymous]
///                  Authenticated]
/// ```
///
/// Pages never touch the store directly; they read
/// [`current_user`](Self::current_user) and call the operations here.
pub struct AuthSession<S, B, C> {
    /// Persistence for the token/record pair.
    store: S,

    /// The credential exchange capability (real API or mock).
    backend: B,

    /// Codec for the persisted user record.
    codec: C,

    /// Which store keys make up the session.
    keys: SessionKeys,

    /// The current-user state machine.
    state: AuthState,
}

impl<S, B, C> AuthSession<S, B, C>
where
    S: SessionStore,
    B: CredentialBackend,
    C: RecordCodec,
{
    /// Creates a manager in the `Uninitialized` state.
    ///
    /// Call [`initialize`](Self::initialize) once at process start to
    /// resolve the persisted session.
    pub fn new(store: S, backend: B, codec: C, keys: SessionKeys) -> Self {
        Self {
            store,
            backend,
            codec,
            keys,
            state: AuthState::Uninitialized,
        }
    }

    /// Resolves the persisted session, once per process lifetime.
    ///
    /// If both the token and a decodable user record are present, the
    /// session is restored. Anything else — a missing key, an
    /// unreadable store, a corrupt record — clears both keys and lands
    /// in `Anonymous`. Failures here are local and silent: starting
    /// logged-out is always safe, starting with a half-session is not.
    ///
    /// Calling this again after the first resolution is a no-op.
    pub fn initialize(&mut self) {
        if !matches!(self.state, AuthState::Uninitialized) {
            tracing::debug!("initialize called again, ignoring");
            return;
        }
        self.state = AuthState::Loading;

        let token = self.read_key(&self.keys.token);
        let record = self.read_key(&self.keys.user);

        let (Some(_token), Some(record)) = (token, record) else {
            self.clear_store();
            self.state = AuthState::Anonymous;
            tracing::debug!("no persisted session");
            return;
        };

        match self.codec.decode::<User>(&record) {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "session restored");
                self.state = AuthState::Authenticated(user);
            }
            Err(err) => {
                tracing::warn!(error = %err, "persisted user record unreadable, clearing session");
                self.clear_store();
                self.state = AuthState::Anonymous;
            }
        }
    }

    /// Signs in to an existing account.
    ///
    /// Awaits the backend's credential exchange (the caller shows a
    /// loading state meanwhile), persists the token/record pair, and
    /// transitions to `Authenticated` — overwriting any session that
    /// was active before.
    ///
    /// # Errors
    /// On any error the previous state survives untouched: a backend
    /// rejection ([`AuthError::InvalidCredentials`] and friends) leaves
    /// the store as it was, and a store failure rolls back to no
    /// persisted session at all. A half-written pair never survives.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<&User, AuthError> {
        let (user, token) = self.backend.authenticate(email, password, role).await?;
        self.persist(&user, &token)?;

        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        self.state = AuthState::Authenticated(user);
        Ok(self.state.user().expect("state set to Authenticated above"))
    }

    /// Creates an account and signs it in.
    ///
    /// Same shape as [`login`](Self::login), with the display name
    /// supplied by the caller instead of derived by the backend.
    ///
    /// # Errors
    /// Identical semantics to [`login`](Self::login).
    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<&User, AuthError> {
        let (user, token) = self.backend.register(email, password, name, role).await?;
        self.persist(&user, &token)?;

        tracing::info!(user_id = %user.id, role = %user.role, "account created");
        self.state = AuthState::Authenticated(user);
        Ok(self.state.user().expect("state set to Authenticated above"))
    }

    /// Signs out.
    ///
    /// Synchronous — no backend round trip. Clears both store keys and
    /// transitions to `Anonymous`. Safe to call when already signed
    /// out: the store is left untouched and the state stays `Anonymous`.
    pub fn logout(&mut self) {
        if matches!(self.state, AuthState::Anonymous) {
            return;
        }
        if let Some(user) = self.state.user() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.clear_store();
        self.state = AuthState::Anonymous;
    }

    /// The signed-in user, or `None`.
    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Returns `true` until [`initialize`](Self::initialize) has
    /// resolved the persisted session.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The full state machine value, for callers that need to
    /// distinguish `Uninitialized` from `Anonymous`.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // -- Internals ---------------------------------------------------------

    /// Reads one key, mapping store errors to "absent" with a warning.
    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "store read failed, treating as absent");
                None
            }
        }
    }

    /// Writes the token/record pair. If either write fails, both keys
    /// are cleared — the invariant is that partial state never survives.
    fn persist(&mut self, user: &User, token: &AuthToken) -> Result<(), AuthError> {
        let record = self.codec.encode(user)?;

        let written = self
            .store
            .set(&self.keys.token, token.as_str())
            .and_then(|()| self.store.set(&self.keys.user, &record));

        if let Err(err) = written {
            self.clear_store();
            return Err(err.into());
        }
        Ok(())
    }

    /// Best-effort removal of both keys. Removal failures are logged
    /// and swallowed: there is no better recovery than trying again on
    /// the next transition, and the in-memory state must not get stuck
    /// because a disk write failed.
    fn clear_store(&mut self) {
        if let Err(err) = self.store.remove(&self.keys.token) {
            tracing::warn!(key = %self.keys.token, error = %err, "failed to clear store key");
        }
        if let Err(err) = self.store.remove(&self.keys.user) {
            tracing::warn!(key = %self.keys.user, error = %err, "failed to clear store key");
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `AuthSession`.
    //!
    //! These cover the full state machine:
    //!   Uninitialized → Loading → {Authenticated, Anonymous}
    //! plus the store-pairing invariant (token and record live and die
    //! together) and the restore-after-restart path.
    //!
    //! The mock backend runs with zero delays; timing behavior is
    //! covered in `mock.rs`.

    use super::*;
    use crate::{MockBackend, MockBackendConfig};
    use skilllink_identity::JsonCodec;
    use skilllink_store::{MemoryStore, StoreError};

    // -- Helpers ----------------------------------------------------------

    const TOKEN_KEY: &str = "skilllink_token";
    const USER_KEY: &str = "skilllink_user";

    /// A manager over an empty in-memory store and an instant mock
    /// backend, already initialized (the normal steady state).
    fn session() -> AuthSession<MemoryStore, MockBackend, JsonCodec> {
        let mut session = session_over(MemoryStore::new());
        session.initialize();
        session
    }

    /// A manager over the given store, NOT yet initialized.
    fn session_over(store: MemoryStore) -> AuthSession<MemoryStore, MockBackend, JsonCodec> {
        AuthSession::new(
            store,
            MockBackend::new(MockBackendConfig::instant()),
            JsonCodec,
            SessionKeys::default(),
        )
    }

    /// A backend that always rejects, for exercising the failure path.
    struct RejectingBackend;

    impl CredentialBackend for RejectingBackend {
        async fn authenticate(
            &self,
            email: &str,
            _password: &str,
            _role: Role,
        ) -> Result<(User, AuthToken), AuthError> {
            Err(AuthError::InvalidCredentials(email.to_owned()))
        }

        async fn register(
            &self,
            _email: &str,
            _password: &str,
            _name: &str,
            _role: Role,
        ) -> Result<(User, AuthToken), AuthError> {
            Err(AuthError::Network("registration service down".into()))
        }
    }

    /// A store that refuses writes to one key, for exercising the
    /// half-written-pair cleanup.
    struct FailingStore {
        inner: MemoryStore,
        fail_on_set: &'static str,
    }

    impl SessionStore for FailingStore {
        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.fail_on_set {
                return Err(StoreError::Write(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }

        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    // =====================================================================
    // initialize()
    // =====================================================================

    #[test]
    fn test_initialize_empty_store_becomes_anonymous() {
        let mut session = session_over(MemoryStore::new());

        session.initialize();

        assert!(session.current_user().is_none());
        assert!(!session.is_loading());
        assert!(matches!(session.state(), AuthState::Anonymous));
    }

    #[tokio::test]
    async fn test_initialize_restores_session_after_login() {
        // Log in, then build a fresh manager over the same store
        // contents — the moral equivalent of a page reload.
        let mut first = session();
        first.login("maria@helpinghands.org", "pw", Role::Ngo).await.unwrap();
        let expected = first.current_user().unwrap().clone();

        let mut second = session_over(first.store().clone());
        second.initialize();

        assert_eq!(second.current_user(), Some(&expected));
    }

    #[test]
    fn test_initialize_token_without_record_clears_both() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "mock_jwt_token_abc").unwrap();

        let mut session = session_over(store);
        session.initialize();

        assert!(session.current_user().is_none());
        // Round-trip cleanup: the orphaned token is gone too.
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_initialize_record_without_token_clears_both() {
        let mut store = MemoryStore::new();
        store
            .set(USER_KEY, r#"{"id":"u1","email":"a@b.com","name":"A","role":"ngo"}"#)
            .unwrap();

        let mut session = session_over(store);
        session.initialize();

        assert!(session.current_user().is_none());
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_initialize_corrupt_record_clears_both() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "mock_jwt_token_abc").unwrap();
        store.set(USER_KEY, "{definitely not a user record").unwrap();

        let mut session = session_over(store);
        session.initialize();

        assert!(session.current_user().is_none());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_second_call_is_noop() {
        let mut session = session();
        session.login("a@b.com", "pw", Role::Admin).await.unwrap();

        // A stray second initialize must not log the user back out.
        session.initialize();

        assert!(session.current_user().is_some());
    }

    #[test]
    fn test_is_loading_until_initialized() {
        let mut session = session_over(MemoryStore::new());
        assert!(session.is_loading());

        session.initialize();

        assert!(!session.is_loading());
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[tokio::test]
    async fn test_login_sets_current_user_with_supplied_email_and_role() {
        let mut session = session();

        session.login("maria@helpinghands.org", "pw", Role::Ngo).await.unwrap();

        let user = session.current_user().expect("should be signed in");
        assert_eq!(user.email, "maria@helpinghands.org");
        assert_eq!(user.role, Role::Ngo);
    }

    #[tokio::test]
    async fn test_login_persists_token_and_record_pair() {
        let mut session = session();

        session.login("a@b.com", "pw", Role::Company).await.unwrap();

        let token = session.store().get(TOKEN_KEY).unwrap().expect("token stored");
        assert!(token.starts_with("mock_jwt_token_"));

        let record = session.store().get(USER_KEY).unwrap().expect("record stored");
        let stored: User = JsonCodec.decode(&record).unwrap();
        assert_eq!(Some(&stored), session.current_user());
    }

    #[tokio::test]
    async fn test_login_overwrites_existing_session() {
        let mut session = session();
        session.login("old@ngo.org", "pw", Role::Ngo).await.unwrap();

        session.login("new@acme.example", "pw", Role::Company).await.unwrap();

        let user = session.current_user().unwrap();
        assert_eq!(user.email, "new@acme.example");
        assert_eq!(user.role, Role::Company);
    }

    #[tokio::test]
    async fn test_login_rejected_leaves_anonymous_state_unchanged() {
        let mut session = AuthSession::new(
            MemoryStore::new(),
            RejectingBackend,
            JsonCodec,
            SessionKeys::default(),
        );
        session.initialize();

        let result = session.login("a@b.com", "wrong", Role::Ngo).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
        assert!(session.current_user().is_none());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_store_failure_clears_partial_write() {
        // The token write succeeds, the record write fails. The token
        // must not be left behind on its own.
        let store = FailingStore {
            inner: MemoryStore::new(),
            fail_on_set: USER_KEY,
        };
        let mut session = AuthSession::new(
            store,
            MockBackend::new(MockBackendConfig::instant()),
            JsonCodec,
            SessionKeys::default(),
        );
        session.initialize();

        let result = session.login("a@b.com", "pw", Role::Ngo).await;

        assert!(matches!(result, Err(AuthError::Store(_))));
        assert!(session.current_user().is_none());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
    }

    // =====================================================================
    // signup()
    // =====================================================================

    #[tokio::test]
    async fn test_signup_keeps_supplied_name_and_role() {
        let mut session = session();

        session.signup("a@b.com", "pw", "A B", Role::Company).await.unwrap();

        let user = session.current_user().unwrap();
        // Unlike login, the name comes from the form, not the email.
        assert_eq!(user.name, "A B");
        assert_eq!(user.role, Role::Company);
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_signup_rejected_leaves_state_unchanged() {
        let mut session = AuthSession::new(
            MemoryStore::new(),
            RejectingBackend,
            JsonCodec,
            SessionKeys::default(),
        );
        session.initialize();

        let result = session.signup("a@b.com", "pw", "A", Role::Ngo).await;

        assert!(matches!(result, Err(AuthError::Network(_))));
        assert!(session.current_user().is_none());
    }

    // =====================================================================
    // logout()
    // =====================================================================

    #[tokio::test]
    async fn test_logout_clears_user_and_store() {
        let mut session = session();
        session.login("a@b.com", "pw", Role::Admin).await.unwrap();

        session.logout();

        assert!(session.current_user().is_none());
        assert_eq!(session.store().get(TOKEN_KEY).unwrap(), None);
        assert_eq!(session.store().get(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_twice_equals_logout_once() {
        let mut session = session();
        session.login("a@b.com", "pw", Role::Admin).await.unwrap();

        session.logout();
        session.logout();

        assert!(session.current_user().is_none());
        assert!(matches!(session.state(), AuthState::Anonymous));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_logout_when_anonymous_is_noop() {
        let mut session = session();

        session.logout();

        assert!(session.current_user().is_none());
        assert!(matches!(session.state(), AuthState::Anonymous));
    }

    // =====================================================================
    // Full lifecycle integration
    // =====================================================================

    #[tokio::test]
    async fn test_full_lifecycle_login_logout_relogin() {
        let mut session = session();

        // 1. Sign in.
        session.login("maria@helpinghands.org", "pw", Role::Ngo).await.unwrap();
        assert!(session.current_user().is_some());

        // 2. Sign out — everything gone.
        session.logout();
        assert!(session.current_user().is_none());
        assert!(session.store().is_empty());

        // 3. Sign in again as someone else.
        session.login("admin@skilllink.example", "pw", Role::Admin).await.unwrap();
        assert_eq!(session.current_user().unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn test_full_lifecycle_signup_reload_logout() {
        // Sign up, "reload" into a second manager, then sign out there.
        let mut first = session();
        first.signup("a@b.com", "pw", "A B", Role::Company).await.unwrap();

        let mut second = session_over(first.store().clone());
        second.initialize();
        assert_eq!(second.current_user().unwrap().name, "A B");

        second.logout();
        assert!(second.store().is_empty());
    }
}
