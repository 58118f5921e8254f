//! Wire DTOs for the sign-in service.
//!
//! DESIGN
//! ======
//! The session user is opaque to this client, so it stays a raw
//! `serde_json::Value` and is persisted exactly as the service returned it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email + password pair posted to the sign-in endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Server-issued credential bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token, stored verbatim.
    pub token: String,
    /// User record of unspecified shape.
    pub user: serde_json::Value,
}

/// Body of a successful (2xx) sign-in response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SigninResponse {
    /// Account identifier used to build the balance route.
    pub id: serde_json::Value,
    pub session: Session,
}

impl SigninResponse {
    /// Route to the balance view for this account.
    ///
    /// String ids are inserted bare; numbers and anything else use their JSON text.
    pub fn balance_route(&self) -> String {
        match &self.id {
            serde_json::Value::String(id) => format!("/balance/{id}"),
            other => format!("/balance/{other}"),
        }
    }
}

/// Body of a rejected (non-2xx) sign-in response.
///
/// A missing `message` reads as empty, which leaves the error line blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
