// ============================================================================
// SESSION - single source of truth for "who is logged in"
// ============================================================================
// The Identity/Credential pair is one Option: both halves present or both
// absent, by construction. Persistence goes through SessionBackend so the
// store itself stays independent of the browser.
// ============================================================================

use crate::models::{Credential, Identity, Role};
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// The paired (Identity, Credential) held by the client.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    pair: Option<(Identity, Credential)>,
}

impl Session {
    pub fn empty() -> Self {
        Self { pair: None }
    }

    pub fn authenticated(identity: Identity, credential: Credential) -> Self {
        Self {
            pair: Some((identity, credential)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.pair.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.pair.as_ref().map(|(identity, _)| identity)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.pair.as_ref().map(|(_, credential)| credential)
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.credential().map(|credential| credential.token.as_str())
    }
}

/// Session plus the restore-in-flight flag the route guard consults.
/// Until `restore()` has run, an empty session is indistinguishable from
/// "not logged in", so guards must treat `initializing` as pending.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionState {
    pub session: Session,
    pub initializing: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::empty(),
            initializing: true,
        }
    }
}

/// Durable key/value mirror of the session (localStorage in the app,
/// an in-memory map in tests).
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Owns the in-memory Session and mirrors every mutation into the backend.
pub struct SessionStore<B: SessionBackend> {
    backend: B,
    state: SessionState,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.state.session
    }

    pub fn initializing(&self) -> bool {
        self.state.initializing
    }

    /// Restore the persisted session, once, at startup. A half-present or
    /// unparsable pair is corruption: both keys are cleared and the user is
    /// simply logged out. Never fails.
    pub fn restore(&mut self) {
        let token = self.backend.read(STORAGE_KEY_TOKEN);
        let user_json = self.backend.read(STORAGE_KEY_USER);

        self.state.session = match (token, user_json) {
            (Some(token), Some(user_json)) => {
                match serde_json::from_str::<Identity>(&user_json) {
                    Ok(identity) => {
                        log::info!("✅ Session restored for {}", identity.email);
                        Session::authenticated(identity, Credential { token })
                    }
                    Err(e) => {
                        log::warn!("⚠️ Stored user is unparsable, clearing session: {}", e);
                        self.clear_persisted();
                        Session::empty()
                    }
                }
            }
            (None, None) => Session::empty(),
            _ => {
                // One half without the other: corrupted, drop both.
                log::warn!("⚠️ Persisted session is half-present, clearing both keys");
                self.clear_persisted();
                Session::empty()
            }
        };

        self.state.initializing = false;
    }

    /// Commit a successful login: durable storage first, then memory.
    /// If either write fails the keys are dropped again so storage never
    /// holds one half of the pair.
    pub fn apply_login(&mut self, identity: Identity, credential: Credential) {
        let wrote_token = self.backend.write(STORAGE_KEY_TOKEN, &credential.token);
        let wrote_user = serde_json::to_string(&identity)
            .map_err(|e| format!("Error serializing user: {}", e))
            .and_then(|json| self.backend.write(STORAGE_KEY_USER, &json));

        if wrote_token.is_err() || wrote_user.is_err() {
            log::error!("❌ Could not persist session, it will not survive a reload");
            self.clear_persisted();
        }

        self.state.session = Session::authenticated(identity, credential);
        self.state.initializing = false;
    }

    /// Log out. Idempotent: clearing an already-empty session is a no-op.
    pub fn clear(&mut self) {
        self.clear_persisted();
        self.state.session = Session::empty();
        self.state.initializing = false;
    }

    fn clear_persisted(&self) {
        self.backend.remove(STORAGE_KEY_TOKEN);
        self.backend.remove(STORAGE_KEY_USER);
    }
}

/// The browser's origin-scoped localStorage as a SessionBackend.
#[derive(Default)]
pub struct LocalStorageBackend;

impl SessionBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        crate::utils::load_raw(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        crate::utils::save_raw(key, value)
    }

    fn remove(&self, key: &str) {
        let _ = crate::utils::remove_from_storage(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        map: RefCell<HashMap<String, String>>,
    }

    impl SessionBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), String> {
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }

    fn identity(role: Role) -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    fn credential() -> Credential {
        Credential {
            token: "tok-123".to_string(),
        }
    }

    #[test]
    fn starts_initializing_and_empty() {
        let store = SessionStore::new(MemoryBackend::default());
        assert!(store.initializing());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn identity_and_credential_always_paired() {
        // P1: across login/logout/restore the pair invariant holds.
        let mut store = SessionStore::new(MemoryBackend::default());
        store.restore();
        assert_eq!(
            store.session().identity().is_some(),
            store.session().credential().is_some()
        );

        store.apply_login(identity(Role::Admin), credential());
        assert_eq!(
            store.session().identity().is_some(),
            store.session().credential().is_some()
        );

        store.clear();
        assert_eq!(
            store.session().identity().is_some(),
            store.session().credential().is_some()
        );
    }

    #[test]
    fn logout_is_idempotent() {
        // P2
        let mut store = SessionStore::new(MemoryBackend::default());
        store.apply_login(identity(Role::User), credential());

        store.clear();
        let once = store.state().clone();
        store.clear();
        assert_eq!(store.state(), &once);
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn restore_round_trips_a_login() {
        // P3: what login persisted is what a reload restores.
        let backend = MemoryBackend::default();
        let mut store = SessionStore::new(backend);
        store.apply_login(identity(Role::Superadmin), credential());

        let map = store.backend.map.borrow().clone();
        let reloaded_backend = MemoryBackend {
            map: RefCell::new(map),
        };
        let mut reloaded = SessionStore::new(reloaded_backend);
        reloaded.restore();

        assert!(!reloaded.initializing());
        assert_eq!(reloaded.session().identity(), Some(&identity(Role::Superadmin)));
        assert_eq!(reloaded.session().token(), Some("tok-123"));
    }

    #[test]
    fn token_without_user_is_cleared() {
        // Scenario E: half a pair is corruption, not a half-login.
        let backend = MemoryBackend::default();
        backend.write(STORAGE_KEY_TOKEN, "orphan-token").unwrap();

        let mut store = SessionStore::new(backend);
        store.restore();

        assert!(!store.session().is_authenticated());
        assert!(store.backend.read(STORAGE_KEY_TOKEN).is_none());
        assert!(store.backend.read(STORAGE_KEY_USER).is_none());
    }

    #[test]
    fn user_without_token_is_cleared() {
        let backend = MemoryBackend::default();
        let json = serde_json::to_string(&identity(Role::User)).unwrap();
        backend.write(STORAGE_KEY_USER, &json).unwrap();

        let mut store = SessionStore::new(backend);
        store.restore();

        assert!(!store.session().is_authenticated());
        assert!(store.backend.read(STORAGE_KEY_USER).is_none());
    }

    #[test]
    fn malformed_user_json_is_cleared() {
        let backend = MemoryBackend::default();
        backend.write(STORAGE_KEY_TOKEN, "tok").unwrap();
        backend.write(STORAGE_KEY_USER, "{not json").unwrap();

        let mut store = SessionStore::new(backend);
        store.restore();

        assert!(!store.session().is_authenticated());
        assert!(store.backend.read(STORAGE_KEY_TOKEN).is_none());
        assert!(store.backend.read(STORAGE_KEY_USER).is_none());
    }

    #[test]
    fn role_is_derived_from_identity() {
        let mut store = SessionStore::new(MemoryBackend::default());
        assert_eq!(store.session().role(), None);
        store.apply_login(identity(Role::Admin), credential());
        assert_eq!(store.session().role(), Some(Role::Admin));
    }
}
