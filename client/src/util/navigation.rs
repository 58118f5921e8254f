//! Navigation port.
//!
//! Pages wrap `leptos_router::hooks::use_navigate` in a closure; any
//! `Fn(&str)` satisfies the port, which keeps flows testable off-browser.

/// Transitions the displayed view to `path`.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Step back in browser history. No-op off-browser.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}
