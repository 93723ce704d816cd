//! Wiring between a timeline [`Driver`] and the page's generation signal.

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use timeline::{Advance, Driver, GenerationState, Playback, Scheduler, Script};

/// Delay between a valid submit and driver invocation.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Invoke the driver for `script` and arm one timer per step offset.
///
/// The returned playback must be owned by the view that renders
/// `generation`; dropping it cancels every step still pending.
pub fn start_timeline<S: Scheduler>(
    scheduler: &S,
    generation: RwSignal<GenerationState>,
    script: Script,
    on_complete: Option<Callback<()>>,
) -> Playback<S::Handle> {
    let driver = Rc::new(RefCell::new(Driver::new(script)));
    generation.update(|g| driver.borrow_mut().start(g));
    let offsets = driver.borrow().offsets();

    let on_due: Rc<dyn Fn(Duration)> = Rc::new(move |at| {
        let mut advance = Advance::default();
        generation.update(|g| advance = driver.borrow_mut().advance_to(g, at));
        if advance.completed {
            #[cfg(feature = "hydrate")]
            log::info!("generation complete after {} ms", at.as_millis());
            if let Some(on_complete) = on_complete {
                on_complete.run(());
            }
        }
    });
    Playback::arm(scheduler, &offsets, on_due)
}

/// Random source for the walkthrough's snippet picks.
#[must_use]
pub fn fresh_rng() -> StdRng {
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    #[cfg(not(feature = "hydrate"))]
    let seed = 0;
    StdRng::seed_from_u64(seed)
}
