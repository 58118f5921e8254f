//! Credential form state.
//!
//! Two independent fields updated only by explicit actions. No local
//! validation; the sign-in service is the only judge of the pair.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

pub use crate::net::types::Credentials;

/// Form edit action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialsAction {
    SetEmail(String),
    SetPassword(String),
}

impl Credentials {
    /// Apply `action`, touching only the field it names.
    #[must_use]
    pub fn reduce(self, action: CredentialsAction) -> Self {
        match action {
            CredentialsAction::SetEmail(email) => Self { email, ..self },
            CredentialsAction::SetPassword(password) => Self { password, ..self },
        }
    }
}
