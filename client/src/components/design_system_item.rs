//! One design-system token row.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use timeline::display::DesignRow;

use crate::components::icon::Icon;

#[component]
pub fn DesignSystemItem(row: DesignRow) -> impl IntoView {
    let status = row.status;
    view! {
        <div class=format!("list-row list-row--{}", row.state_class)>
            <div class="list-row__icon">
                <Icon name=row.icon.icon tone=row.icon.tone/>
            </div>
            <div class="list-row__body">
                <h4 class="list-row__title">{row.name}</h4>
                <p class="list-row__description">{row.description}</p>
            </div>
            <div class=format!("list-row__status tone--{}", status.tone) title=status.label>
                {if status.spinner {
                    view! { <span class="spinner"></span> }.into_any()
                } else {
                    view! { <Icon name="check" tone="green"/> }.into_any()
                }}
            </div>
        </div>
    }
}
