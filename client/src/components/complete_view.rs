//! "Your code is ready" summary with share link and launch subscription.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::session::SessionState;
use crate::util::clipboard;

/// Summary name when the visitor left the field blank.
const FALLBACK_NAME: &str = "My Project";

#[component]
pub fn CompleteView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let settings = move || session.with(SessionState::effective_settings);

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let copied = RwSignal::new(false);
    let href = clipboard::current_href();

    let on_copy = {
        let href = href.clone();
        move |_| {
            clipboard::write_text(&href);
            copied.set(true);
            set_timeout(move || copied.set(false), clipboard::COPIED_RESET);
        }
    };

    let on_subscribe = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = email.get_untracked();
        let mut outcome = Ok(());
        session.update(|s| outcome = s.submit_email(&raw));
        if let Err(msg) = outcome {
            email_error.set(Some(msg));
        }
    };

    let summary = move || {
        let s = settings();
        format!("We've generated your {} project with {} features.", s.project_type.tag(), s.features.len())
    };
    let name = move || {
        let s = settings();
        if s.project_name.is_empty() { FALLBACK_NAME.to_owned() } else { s.project_name }
    };
    let features = move || settings().features.iter().map(|f| f.tag()).collect::<Vec<_>>().join(", ");
    let subscribed = move || session.with(|s| s.email_submitted);
    let subscribed_email = move || session.with(|s| s.settings.as_ref().and_then(|x| x.email.clone()).unwrap_or_default());

    view! {
        <div class="card complete">
            <div class="complete__badge">
                <Icon name="check" tone="green"/>
            </div>
            <h2 class="complete__title">"Your code is ready!"</h2>
            <p class="complete__summary">{summary}</p>

            <div class="complete__details">
                <h3 class="complete__subtitle">"Project details"</h3>
                <dl class="detail-list">
                    <div class="detail-list__row">
                        <dt>"Project name:"</dt>
                        <dd>{name}</dd>
                    </div>
                    <div class="detail-list__row">
                        <dt>"Type:"</dt>
                        <dd>{move || settings().project_type.tag()}</dd>
                    </div>
                    <div class="detail-list__row">
                        <dt>"Features:"</dt>
                        <dd>{features}</dd>
                    </div>
                    <div class="detail-list__row">
                        <dt>"Theme:"</dt>
                        <dd>{move || settings().theme.tag()}</dd>
                    </div>
                </dl>
            </div>

            <button type="button" class="download-button">
                <Icon name="download"/>
                "Download Project"
            </button>

            <div class="share-link">
                <input class="share-link__input" type="text" readonly=true value=href/>
                <button type="button" class="share-link__copy" aria-label="Copy link" on:click=on_copy>
                    <Show when=move || copied.get() fallback=|| view! { <Icon name="copy"/> }>
                        <Icon name="check" tone="green"/>
                    </Show>
                </button>
            </div>

            <Show
                when=subscribed
                fallback=move || {
                    view! {
                        <div class="subscribe">
                            <h3 class="subscribe__title">"Get notified when we launch"</h3>
                            <form on:submit=on_subscribe>
                                <input
                                    type="email"
                                    class="field__input"
                                    class:field__input--error=move || email_error.get().is_some()
                                    placeholder="Enter your email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| {
                                        email.set(event_target_value(&ev));
                                        email_error.set(None);
                                    }
                                />
                                {move || email_error.get().map(|msg| view! { <p class="field__error">{msg}</p> })}
                                <button type="submit" class="subscribe__button">"Subscribe"</button>
                            </form>
                        </div>
                    }
                }
            >
                <div class="subscribe subscribe--done">
                    <p class="subscribe__thanks">
                        <Icon name="check" tone="green"/>
                        "Thank you for subscribing!"
                    </p>
                    <p class="subscribe__note">{move || format!("We'll notify you at {} when we launch.", subscribed_email())}</p>
                </div>
            </Show>
        </div>
    }
}
