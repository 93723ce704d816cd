//! Sticky page header with the product mark.

use leptos::prelude::*;

use crate::components::icon::Icon;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a class="logo" href="/">
            <span class="logo__mark">
                <Icon name="logo"/>
            </span>
            <span class="logo__name">"Product Builder"</span>
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <Logo/>
            </div>
        </header>
    }
}
