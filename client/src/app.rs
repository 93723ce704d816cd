//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use timeline::GenerationState;

use crate::pages::{coming_soon::ComingSoonPage, home::HomePage};
use crate::state::session::SessionState;
use crate::util::pointer_glow;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and generation contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let generation = RwSignal::new(GenerationState::default());
    provide_context(session);
    provide_context(generation);

    pointer_glow::install();

    view! {
        <Stylesheet id="leptos" href="/pkg/product-builder.css"/>
        <Title text="Product Builder"/>

        <div class="app">
            <div class="app__glow" aria-hidden="true">
                <div class="app__glow-blob app__glow-blob--primary"></div>
                <div class="app__glow-blob app__glow-blob--secondary"></div>
                <div class="app__glow-blob app__glow-blob--blue"></div>
            </div>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("coming-soon") view=ComingSoonPage/>
                </Routes>
            </Router>
        </div>
    }
}
