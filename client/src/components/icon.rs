//! Inline stroke icons keyed by the glyph names the display tables emit.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

/// Stroke icon. Unknown names render as a plain circle.
#[component]
pub fn Icon(name: &'static str, #[prop(optional)] tone: &'static str) -> impl IntoView {
    let class = if tone.is_empty() { "icon".to_owned() } else { format!("icon icon--{tone}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(name)}
        </svg>
    }
}

fn paths(name: &str) -> AnyView {
    match name {
        "check" => view! { <path d="M20 6 9 17l-5-5"/> }.into_any(),
        "check-circle" => view! {
            <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
            <path d="m9 11 3 3L22 4"/>
        }
        .into_any(),
        "type" => view! {
            <path d="M4 7V4h16v3"/>
            <path d="M9 20h6"/>
            <path d="M12 4v16"/>
        }
        .into_any(),
        "grid" => view! {
            <rect x="3" y="3" width="7" height="7" rx="1"/>
            <rect x="14" y="3" width="7" height="7" rx="1"/>
            <rect x="14" y="14" width="7" height="7" rx="1"/>
            <rect x="3" y="14" width="7" height="7" rx="1"/>
        }
        .into_any(),
        "ruler" => view! {
            <path d="M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.4 2.4 0 0 1 0-3.4l2.6-2.6a2.4 2.4 0 0 1 3.4 0Z"/>
            <path d="m7.5 10.5 2-2"/>
            <path d="m10.5 13.5 2-2"/>
            <path d="m13.5 16.5 2-2"/>
        }
        .into_any(),
        "code" => view! {
            <path d="m16 18 6-6-6-6"/>
            <path d="m8 6-6 6 6 6"/>
        }
        .into_any(),
        "file-text" => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8Z"/>
            <path d="M14 2v6h6"/>
            <path d="M16 13H8"/>
            <path d="M16 17H8"/>
        }
        .into_any(),
        "settings" => view! {
            <circle cx="12" cy="12" r="3"/>
            <path d="M12 2v3M12 19v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M2 12h3M19 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1"/>
        }
        .into_any(),
        "layout" => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M3 9h18"/>
            <path d="M9 21V9"/>
        }
        .into_any(),
        "file" => view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8Z"/>
            <path d="M14 2v6h6"/>
        }
        .into_any(),
        "download" => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="m7 10 5 5 5-5"/>
            <path d="M12 15V3"/>
        }
        .into_any(),
        "copy" => view! {
            <rect x="9" y="9" width="13" height="13" rx="2"/>
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
        }
        .into_any(),
        "logo" => view! { <path d="m8 3 4 8 5-5 5 15H2L8 3z"/> }.into_any(),
        _ => view! { <circle cx="12" cy="12" r="10"/> }.into_any(),
    }
}
