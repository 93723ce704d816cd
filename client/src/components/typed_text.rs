//! Looping typed-text span driven by [`Typewriter`].
//!
//! The interval only exists in the browser; SSR renders an empty span with
//! the cursor so hydration matches.

use leptos::prelude::*;

use crate::util::typewriter::Typewriter;

#[component]
pub fn TypedText(
    strings: Vec<String>,
    /// Milliseconds per typed or deleted character.
    #[prop(default = 60)]
    tick_ms: u32,
    /// Ticks to hold a finished string before deleting it.
    #[prop(default = 16)]
    hold_ticks: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(strings, hold_ticks));

    #[cfg(feature = "hydrate")]
    {
        let interval = gloo_timers::callback::Interval::new(tick_ms, move || writer.update(Typewriter::tick));
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            interval.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = tick_ms;

    view! {
        <span class=format!("typed {class}")>
            {move || writer.with(|w| w.text().to_owned())}
            <span class="typed__cursor">"|"</span>
        </span>
    }
}
