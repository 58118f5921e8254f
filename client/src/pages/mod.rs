//! Route-level screens of the wallet app.
//!
//! ROUTES
//! ======
//! `signin` serves `/` and `/signin`; `balance` serves `/balance/:id`, the
//! landing target after a successful sign-in.

pub mod balance;
pub mod signin;
