//! Primary page: hero, settings form, then the live generation view.
//!
//! SYSTEM CONTEXT
//! ==============
//! A valid submit holds the busy state for [`SUBMIT_DELAY`], then invokes
//! the primary timeline against the shared `GenerationState`. The delay
//! timer and every step timer live in one `Playback` owned by this page, so
//! leaving the route cancels all of them.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use timeline::{GenerationState, Playback, Scheduler, Script, Settings, Stage};

use crate::components::complete_view::CompleteView;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::input_form::InputForm;
use crate::components::processing_view::ProcessingView;
use crate::state::session::SessionState;
use crate::util::run::{SUBMIT_DELAY, start_timeline};
use crate::util::scheduler::{BrowserScheduler, BrowserTask};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let generation = expect_context::<RwSignal<GenerationState>>();

    let playback: StoredValue<Playback<BrowserTask>, LocalStorage> = StoredValue::new_local(Playback::idle());
    on_cleanup(move || {
        playback.try_update_value(Playback::cancel);
        // A cancelled run cannot finish; start over on the next visit.
        generation.try_set(GenerationState::default());
        session.try_update(SessionState::finish_submit);
    });

    let on_submit = Callback::new(move |settings: Settings| {
        #[cfg(feature = "hydrate")]
        log::info!("settings accepted for {:?}; starting in {} ms", settings.project_name, SUBMIT_DELAY.as_millis());
        #[cfg(not(feature = "hydrate"))]
        let _ = settings;

        let begin = move || {
            let run = start_timeline(&BrowserScheduler, generation, Script::primary(), None);
            playback.update_value(|p| p.absorb(run));
            session.update(SessionState::finish_submit);
        };
        let delay = BrowserScheduler.schedule(SUBMIT_DELAY, Box::new(begin));
        playback.update_value(|p| p.push(delay));
    });

    let stage = move || generation.with(|g| g.stage);

    view! {
        <div class="page page--home">
            <Header/>
            <main class="page__main">
                <Hero/>
                <div class="page__panel card">
                    {move || match stage() {
                        Stage::Input => view! { <InputForm on_submit=on_submit/> }.into_any(),
                        Stage::Processing => view! { <ProcessingView/> }.into_any(),
                        Stage::Complete => view! { <CompleteView/> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
