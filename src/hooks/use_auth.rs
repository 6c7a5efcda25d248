use yew::prelude::*;

use crate::services::perform_login;
use crate::state::{LocalStorageBackend, SessionState, SessionStore};

/// Everything the UI needs to know about authentication.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: SessionState,
    /// A login exchange is in flight.
    pub busy: bool,
    /// Last login error, displayed inline on the login form.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: SessionState::default(),
            busy: false,
            error: None,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl UseAuthHandle {
    pub fn session(&self) -> &SessionState {
        &self.state.session
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthState::default);
    // The store owns the durable mirror; the yew state is a render snapshot.
    let store = use_mut_ref(|| SessionStore::new(LocalStorageBackend));

    // Restore the persisted session once, before any guarded render settles.
    {
        let state = state.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            store.borrow_mut().restore();
            let mut next = (*state).clone();
            next.session = store.borrow().state().clone();
            state.set(next);
            || ()
        });
    }

    let login = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let store = store.clone();

            let mut next = (*state).clone();
            next.busy = true;
            next.error = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                match perform_login(&email, &password).await {
                    Ok((identity, credential)) => {
                        // Session state is global: commit it even if the
                        // login screen has since been navigated away from.
                        store.borrow_mut().apply_login(identity, credential);
                        let mut next = (*state).clone();
                        next.session = store.borrow().state().clone();
                        next.busy = false;
                        next.error = None;
                        state.set(next);
                    }
                    Err(e) => {
                        let mut next = (*state).clone();
                        next.busy = false;
                        next.error = Some(e);
                        state.set(next);
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            store.borrow_mut().clear();
            let mut next = (*state).clone();
            next.session = store.borrow().state().clone();
            next.error = None;
            state.set(next);
        })
    };

    let clear_error = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.error = None;
            state.set(next);
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
        clear_error,
    }
}
