//! Fixed backdrop: grid lines plus three drifting blobs. Motion is pure CSS.

use leptos::prelude::*;

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__shade"></div>
            <div class="backdrop__grid"></div>
            <div class="backdrop__blob backdrop__blob--a"></div>
            <div class="backdrop__blob backdrop__blob--b"></div>
            <div class="backdrop__blob backdrop__blob--c"></div>
        </div>
    }
}
