//! Share-link helpers for the complete view.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::time::Duration;

/// How long the copy button shows its confirmation.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Current page URL, empty during SSR or when the browser refuses.
#[must_use]
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Write `text` to the system clipboard. Fire-and-forget: the returned
/// promise is dropped and failures are ignored.
pub fn write_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
}
