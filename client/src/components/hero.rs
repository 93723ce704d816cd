//! Landing hero: headline with rotating word and chips for the settings.

use leptos::prelude::*;
use timeline::display::chip_label;

use crate::components::typed_text::TypedText;
use crate::state::session::SessionState;

#[component]
pub fn Hero() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = move || session.with(SessionState::effective_settings);

    view! {
        <section class="hero">
            <h1 class="hero__title">
                <span class="gradient-text">"Your Digital Product"</span>
                <br/>
                <TypedText
                    strings=vec!["Reimagined".to_owned(), "Simplified".to_owned(), "Accelerated".to_owned()]
                    tick_ms=80
                />
            </h1>
            <div class="hero__chips">
                <span class="chip chip--primary">{move || chip_label(settings().project_type.tag())}</span>
                {move || {
                    settings()
                        .features
                        .into_iter()
                        .map(|f| view! { <span class="chip chip--secondary">{chip_label(f.tag())}</span> })
                        .collect_view()
                }}
                <span class="chip chip--green">{move || settings().theme.tag()}</span>
            </div>
            <p class="hero__lead">
                "Transform your ideas into production-ready code in minutes, not days. "
                "Our AI-powered platform generates clean, maintainable code based on your specifications."
            </p>
        </section>
    }
}
