//! Horizontal progress bar.

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>, #[prop(optional)] compact: bool) -> impl IntoView {
    let width = move || format!("width: {}%", progress.get().min(100));
    view! {
        <div class="progress" class:progress--compact=compact>
            <div class="progress__fill" style=width></div>
        </div>
    }
}
