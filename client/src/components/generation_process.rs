//! Coming-soon walkthrough: streams design tokens, then files with
//! snippets, then a completion card.
//!
//! DESIGN
//! ======
//! Owns a private `GenerationState` signal and the `Playback` feeding it, so
//! unmounting the component cancels every pending step. `on_complete` fires
//! once, from the step that moves the stage to complete.

#[cfg(test)]
#[path = "generation_process_test.rs"]
mod generation_process_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use timeline::{GenerationState, Phase, Playback, Script, Settings, Stage};
use timeline::display::design_rows;

use crate::components::code_display::CodeDisplay;
use crate::components::design_system_item::DesignSystemItem;
use crate::components::icon::Icon;
use crate::components::progress_bar::ProgressBar;
use crate::components::typed_text::TypedText;
use crate::util::run::{fresh_rng, start_timeline};
use crate::util::scheduler::{BrowserScheduler, BrowserTask};

/// Which block of the walkthrough is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Design,
    Files,
    Complete,
}

fn current_step(g: &GenerationState) -> Step {
    match (g.stage, g.phase) {
        (Stage::Complete, _) => Step::Complete,
        (_, Phase::Files) => Step::Files,
        (_, Phase::Design) => Step::Design,
    }
}

#[component]
pub fn GenerationProcess(settings: Settings, on_complete: Callback<()>) -> impl IntoView {
    let generation = RwSignal::new(GenerationState::default());
    let script = Script::walkthrough(&settings, &mut fresh_rng());
    let playback: StoredValue<Playback<BrowserTask>, LocalStorage> =
        StoredValue::new_local(start_timeline(&BrowserScheduler, generation, script, Some(on_complete)));
    on_cleanup(move || {
        playback.try_update_value(Playback::cancel);
    });

    let step = Memo::new(move |_| generation.with(current_step));
    let progress = Signal::derive(move || generation.with(|g| g.progress));

    let design_lines = vec![
        format!("Analyzing project \"{}\"...", settings.project_name),
        "Extracting design tokens...".to_owned(),
        "Building component library...".to_owned(),
        format!("Optimizing for {} theme...", settings.theme.tag()),
    ];
    let feature_list = settings.features.iter().map(|f| f.tag()).collect::<Vec<_>>().join(", ");
    let file_lines = vec![
        "Scaffolding project structure...".to_owned(),
        format!("Implementing {feature_list}..."),
        format!("Applying {} styling...", settings.theme.tag()),
        "Optimizing bundle size...".to_owned(),
    ];
    let done_line = format!(
        "Your {} project is ready with {} features.",
        settings.project_name,
        settings.features.len()
    );

    view! {
        <div class="walkthrough">
            <div class="walkthrough__head">
                <div class="walkthrough__title-row">
                    <h2 class="walkthrough__title">
                        {move || match step.get() {
                            Step::Design => "Designing System",
                            Step::Files => "Generating Files",
                            Step::Complete => "Generation Complete",
                        }}
                    </h2>
                    <div class="walkthrough__progress">
                        <ProgressBar progress=progress compact=true/>
                        <span class="walkthrough__percent">{move || format!("{}%", progress.get())}</span>
                    </div>
                </div>
                <div class="walkthrough__status mono">
                    {move || match step.get() {
                        Step::Design => view! {
                            <TypedText strings=design_lines.clone() tick_ms=40 hold_ticks=25/>
                        }
                        .into_any(),
                        Step::Files => view! {
                            <TypedText strings=file_lines.clone() tick_ms=40 hold_ticks=25/>
                        }
                        .into_any(),
                        Step::Complete => view! {
                            <span class="walkthrough__done">
                                <Icon name="check-circle" tone="green"/>
                                "Project successfully generated!"
                            </span>
                        }
                        .into_any(),
                    }}
                </div>
            </div>

            <Show when=move || step.get() == Step::Design>
                <div class="walkthrough__design-grid">
                    <For
                        each=move || generation.with(|g| design_rows(&g.design_system))
                        key=|row| row.id
                        children=|row| view! { <DesignSystemItem row=row/> }
                    />
                </div>
            </Show>

            <Show when=move || step.get() == Step::Files>
                <div class="walkthrough__files">
                    <For
                        each=move || generation.with(|g| g.files.clone())
                        key=|file| file.id
                        children=|file| view! { <CodeDisplay file=file/> }
                    />
                </div>
            </Show>

            <Show when=move || step.get() == Step::Complete>
                <div class="walkthrough__complete">
                    <div class="walkthrough__complete-badge">
                        <Icon name="check-circle" tone="primary"/>
                    </div>
                    <h3>"Generation Complete!"</h3>
                    <p>{done_line.clone()}</p>
                    <button type="button" class="download-button">"Download Project"</button>
                </div>
            </Show>
        </div>
    }
}
