//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided as context; `credentials` is owned by the
//! sign-in page and lives only as long as the screen.

pub mod auth;
pub mod credentials;
