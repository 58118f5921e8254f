//! Networking modules for the sign-in service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport port, `types` defines the wire schema, and
//! `signin` drives one submission across the transport, auth, storage and
//! navigation ports.

pub mod api;
pub mod signin;
pub mod types;
