//! Sign-in submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs one credential submission end to end: POST, branch on status, then on
//! success notify auth, persist the session, and navigate to the balance view.
//! Every collaborator is an injected port so the page supplies browser
//! implementations and tests supply recording ones.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, rejected credentials, malformed bodies and storage
//! failures are distinct [`SigninError`] variants internally, but [`SigninFlow::submit`]
//! collapses them into the single message string the form renders.
//!
//! There is no in-flight guard: each call issues its own request.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use super::api::{SigninTransport, signin_endpoint};
use super::types::{Credentials, ErrorBody, Session, SigninResponse};
use crate::state::auth::AuthService;
use crate::util::navigation::Navigator;
use crate::util::storage::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};

/// Failure of a single sign-in attempt. `Display` is the user-visible text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigninError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status with a server-supplied message.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Response body did not match the expected shape.
    #[error("{0}")]
    Malformed(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn malformed(err: serde_json::Error) -> SigninError {
    SigninError::Malformed(err.to_string())
}

/// Credential submission handler wired to its collaborators.
#[derive(Clone, Debug)]
pub struct SigninFlow<T, A, S, N> {
    transport: T,
    auth: A,
    store: S,
    navigator: N,
    endpoint: String,
}

impl<T, A, S, N> SigninFlow<T, A, S, N>
where
    T: SigninTransport,
    A: AuthService,
    S: KeyValueStore,
    N: Navigator,
{
    pub fn new(transport: T, auth: A, store: S, navigator: N) -> Self {
        Self { transport, auth, store, navigator, endpoint: signin_endpoint().to_owned() }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit `credentials` and run the success path.
    ///
    /// Returns the balance route that was navigated to.
    ///
    /// # Errors
    ///
    /// Returns a [`SigninError`] if the request fails, the service rejects the
    /// credentials, a body does not parse, or the session cannot be persisted.
    pub async fn try_submit(&self, credentials: &Credentials) -> Result<String, SigninError> {
        let body = serde_json::to_value(credentials).map_err(malformed)?;
        let resp = self
            .transport
            .post_json(&self.endpoint, &body)
            .await
            .map_err(SigninError::Transport)?;

        if !resp.ok() {
            let error: ErrorBody = serde_json::from_str(&resp.body).map_err(malformed)?;
            return Err(SigninError::Rejected { status: resp.status, message: error.message });
        }

        let data: SigninResponse = serde_json::from_str(&resp.body).map_err(malformed)?;
        log::debug!("sign-in accepted for account {}", data.id);

        let route = data.balance_route();
        let Session { token, user } = data.session;
        let user_json = serde_json::to_string(&user).map_err(malformed)?;

        self.auth.login(token.clone(), user);
        self.store.set(TOKEN_KEY, &token)?;
        self.store.set(USER_KEY, &user_json)?;
        self.navigator.navigate(&route);
        Ok(route)
    }

    /// Submit `credentials`, swallowing any failure.
    ///
    /// Returns the message to show under the form, or `None` after a
    /// successful sign-in.
    pub async fn submit(&self, credentials: &Credentials) -> Option<String> {
        match self.try_submit(credentials).await {
            Ok(route) => {
                log::debug!("navigated to {route}");
                None
            }
            Err(e) => {
                log::error!("sign-in failed: {e:?}");
                Some(e.to_string())
            }
        }
    }
}
