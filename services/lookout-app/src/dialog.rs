//! Native browser dialogs for confirmations and notices

/// Blocking yes/no confirmation. Answers "no" when no window is
/// available, so a handler running outside the browser never deletes.
pub fn confirm(message: &str) -> bool {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = message;
        false
    }
}

/// Blocking notice for action-local failures
pub fn alert(message: &str) {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = message;
    }
}
