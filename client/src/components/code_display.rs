//! Walkthrough file card: colour dot, name, kind, and its snippet.

use leptos::prelude::*;
use timeline::FileEntry;
use timeline::display::file_dot;

use crate::components::icon::Icon;

#[component]
pub fn CodeDisplay(file: FileEntry) -> impl IntoView {
    let dot = format!("dot dot--{}", file_dot(file.kind));
    view! {
        <div class="code-display">
            <div class="code-display__bar">
                <div class="code-display__name">
                    <span class=dot></span>
                    <span class="mono">{file.name}</span>
                </div>
                <div class="code-display__kind">
                    <Icon name="file" tone="grey"/>
                    <span>{file.kind.tag()}</span>
                </div>
            </div>
            <pre class="code-display__pre">
                <code>{file.content.unwrap_or_default()}</code>
            </pre>
        </div>
    }
}
