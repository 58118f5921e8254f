//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf display elements composed by pages. Components hold no shared state;
//! values arrive as props and edits leave through callbacks.

pub mod back_button;
pub mod button;
pub mod field;
pub mod title;
