//! Browser-facing ports used by the sign-in flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` persists the session to `localStorage` and `navigation` moves
//! between routes. Both sit behind small traits so flows run off-browser.

pub mod navigation;
pub mod storage;
