//! One generated-file row with its status badge.

use leptos::prelude::*;
use timeline::display::FileRow;

use crate::components::icon::Icon;

#[component]
pub fn FileItem(row: FileRow) -> impl IntoView {
    let status = row.status;
    view! {
        <div class=format!("list-row list-row--{}", row.state_class)>
            <div class="list-row__icon">
                <Icon name=row.icon.icon tone=row.icon.tone/>
            </div>
            <div class="list-row__body">
                <div class="list-row__heading">
                    <h4 class="list-row__title list-row__title--mono">{row.name}</h4>
                    <span class="list-row__path">{row.path}</span>
                </div>
                {row.description.map(|d| view! { <p class="list-row__description">{d}</p> })}
            </div>
            <div class=format!("list-row__status tone--{}", status.tone)>
                <Show when=move || status.spinner>
                    <span class="spinner spinner--small"></span>
                </Show>
                <span class="list-row__status-label">{status.label}</span>
            </div>
        </div>
    }
}
