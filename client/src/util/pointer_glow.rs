//! Pointer-following background glow.
//!
//! Writes the pointer position as `--mouse-x` / `--mouse-y` (0..1) on the
//! `<html>` element; the stylesheet positions a gradient from them. Requires
//! a browser environment; SSR is a no-op.

#[cfg(test)]
#[path = "pointer_glow_test.rs"]
mod pointer_glow_test;

/// Pointer position as fractions of the viewport, clamped to `[0, 1]`.
/// A degenerate viewport centers the glow.
#[must_use]
pub fn pointer_ratio(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    let axis = |pos: f64, extent: f64| {
        if extent <= 0.0 || !extent.is_finite() { 0.5 } else { (pos / extent).clamp(0.0, 1.0) }
    };
    (axis(client_x, width), axis(client_y, height))
}

/// Track pointer movement for the lifetime of the calling component.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};
        use wasm_bindgen::JsCast as _;

        let handle = window_event_listener(leptos::ev::mousemove, |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let (x, y) = pointer_ratio(f64::from(ev.client_x()), f64::from(ev.client_y()), width, height);

            let Some(root) = window
                .document()
                .and_then(|d| d.document_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            let style = root.style();
            let _ = style.set_property("--mouse-x", &x.to_string());
            let _ = style.set_property("--mouse-y", &y.to_string());
        });
        on_cleanup(move || handle.remove());
    }
}
