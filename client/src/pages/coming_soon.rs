//! Coming-soon page: form, then the streamed walkthrough, then the share
//! and subscribe panel once the walkthrough completes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use timeline::{Playback, Scheduler, Settings};

use crate::components::animated_background::AnimatedBackground;
use crate::components::complete_view::CompleteView;
use crate::components::generation_process::GenerationProcess;
use crate::components::header::Logo;
use crate::components::input_form::InputForm;
use crate::state::session::SessionState;
use crate::util::run::SUBMIT_DELAY;
use crate::util::scheduler::{BrowserScheduler, BrowserTask};

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let submitted = RwSignal::new(None::<Settings>);
    let show_success = RwSignal::new(false);

    let pending: StoredValue<Playback<BrowserTask>, LocalStorage> = StoredValue::new_local(Playback::idle());
    on_cleanup(move || {
        pending.try_update_value(Playback::cancel);
        session.try_update(SessionState::finish_submit);
    });

    let on_submit = Callback::new(move |settings: Settings| {
        let reveal = move || {
            submitted.set(Some(settings));
            session.update(SessionState::finish_submit);
        };
        let delay = BrowserScheduler.schedule(SUBMIT_DELAY, Box::new(reveal));
        pending.update_value(|p| p.push(delay));
    });
    let on_complete = Callback::new(move |()| show_success.set(true));

    view! {
        <div class="page page--coming-soon">
            <AnimatedBackground/>
            <header class="site-header site-header--bare">
                <div class="site-header__inner">
                    <Logo/>
                </div>
            </header>
            <main class="page__main page__main--centered">
                {move || match submitted.get() {
                    None => view! {
                        <div class="intro">
                            <h1 class="intro__title">"AI-Powered Code Generator"</h1>
                            <p class="intro__lead">
                                "Instantly generate production-ready React applications with Tailwind CSS "
                                "based on your specifications. Coming soon."
                            </p>
                            <div class="intro__form">
                                <InputForm on_submit=on_submit/>
                            </div>
                        </div>
                    }
                    .into_any(),
                    Some(settings) => view! {
                        <GenerationProcess settings=settings on_complete=on_complete/>
                        <Show when=move || show_success.get()>
                            <CompleteView/>
                        </Show>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
