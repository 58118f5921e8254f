//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides an `RwSignal<AuthState>` context. Pages never mutate it
//! directly; they dispatch [`AuthAction`]s through the [`AuthService`] port so
//! flows can be exercised against a recording service in tests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Tagged action consumed by the auth store.
///
/// Serializes as `{"type": "LOGIN", "payload": {"token": …, "user": …}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthAction {
    Login { token: String, user: serde_json::Value },
}

/// Authentication state for the app session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<serde_json::Value>,
}

impl AuthState {
    /// Rebuild auth state from a previously persisted session.
    ///
    /// A missing or unparseable user record leaves `user` unset.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { token, user }
    }

    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::Login { token, user } => {
                self.token = Some(token);
                self.user = Some(user);
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Injectable auth store capability.
pub trait AuthService {
    fn dispatch(&self, action: AuthAction);

    /// Mark the app as authenticated for `token` and `user`.
    fn login(&self, token: String, user: serde_json::Value) {
        self.dispatch(AuthAction::Login { token, user });
    }
}

impl<A: AuthService + ?Sized> AuthService for &A {
    fn dispatch(&self, action: AuthAction) {
        (**self).dispatch(action);
    }
}

impl AuthService for RwSignal<AuthState> {
    fn dispatch(&self, action: AuthAction) {
        self.update(|state| state.apply(action));
    }
}
