//! Settings form: name, project type, features, theme.
//!
//! DESIGN
//! ======
//! Field edits and validation go through `SessionState`, so the hero chips
//! track the draft live. A valid submit hands the settings record to
//! `on_submit`; the page owns what happens next (busy delay, driver start).

use leptos::prelude::*;
use timeline::{Feature, ProjectType, Settings, Theme};

use crate::components::typed_text::TypedText;
use crate::state::session::SessionState;

#[component]
pub fn InputForm(on_submit: Callback<Settings>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let busy = move || session.with(|s| s.submitting);
    let name_error = move || session.with(|s| s.errors.project_name);
    let features_error = move || session.with(|s| s.errors.features);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        session.update(|s| accepted = s.begin_submit());
        if let Some(settings) = accepted {
            on_submit.run(settings);
        }
    };

    view! {
        <div class="card form-card">
            <h2 class="form-card__title">
                <TypedText
                    strings=vec![
                        "Generate your project".to_owned(),
                        "Build your application".to_owned(),
                        "Create your codebase".to_owned(),
                    ]
                    tick_ms=50
                    class="gradient-text"
                />
            </h2>

            <form on:submit=on_form_submit>
                <div class="field">
                    <label class="field__label" for="project-name">"Project Name"</label>
                    <input
                        id="project-name"
                        type="text"
                        class="field__input"
                        class:field__input--error=move || name_error().is_some()
                        placeholder="My Awesome Project"
                        prop:value=move || session.with(|s| s.draft.project_name.clone())
                        on:input=move |ev| session.update(|s| s.set_project_name(event_target_value(&ev)))
                    />
                    {move || name_error().map(|msg| view! { <p class="field__error">{msg}</p> })}
                </div>

                <div class="field">
                    <span class="field__label">"Project Type"</span>
                    <div class="choice-grid choice-grid--three">
                        {ProjectType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <button
                                        type="button"
                                        class="choice"
                                        class:choice--primary=move || session.with(|s| s.draft.project_type == kind)
                                        on:click=move |_| session.update(|s| s.set_project_type(kind))
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="field">
                    <span class="field__label">"Features"</span>
                    <div class="choice-grid choice-grid--two">
                        {Feature::ALL.into_iter().map(|feature| feature_toggle(session, feature)).collect_view()}
                    </div>
                    {move || features_error().map(|msg| view! { <p class="field__error">{msg}</p> })}
                </div>

                <div class="field">
                    <span class="field__label">"Theme"</span>
                    <div class="choice-grid choice-grid--five">
                        {Theme::ALL
                            .into_iter()
                            .map(|theme| {
                                view! {
                                    <button
                                        type="button"
                                        class="choice"
                                        class:choice--secondary=move || session.with(|s| s.draft.theme == theme)
                                        on:click=move |_| session.update(|s| s.set_theme(theme))
                                    >
                                        {theme.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <button class="submit-button" type="submit" disabled=busy>
                    <Show when=busy fallback=|| "Generate Code">
                        <span class="spinner spinner--light"></span>
                        <span>"Processing..."</span>
                    </Show>
                </button>
            </form>
        </div>
    }
}

fn feature_toggle(session: RwSignal<SessionState>, feature: Feature) -> impl IntoView {
    let checked = move || session.with(|s| s.draft.has_feature(feature));
    view! {
        <div
            class="feature-toggle"
            class:feature-toggle--on=checked
            on:click=move |_| session.update(|s| s.toggle_feature(feature))
        >
            <input type="checkbox" prop:checked=checked tabindex="-1"/>
            <span class="feature-toggle__label">{feature.label()}</span>
        </div>
    }
}
