//! Highlighted code preview with a window-style title bar.

use leptos::prelude::*;

use crate::util::highlight::highlight;

#[component]
pub fn CodeBlock(
    code: String,
    #[prop(into)] language: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let tokens = highlight(&code);
    view! {
        <div class="code-block" data-language=language>
            {title.map(|title| view! {
                <div class="code-block__bar">
                    <span class="code-block__dots">
                        <span class="dot dot--red"></span>
                        <span class="dot dot--yellow"></span>
                        <span class="dot dot--green"></span>
                    </span>
                    <span class="code-block__title">{title}</span>
                </div>
            })}
            <div class="code-block__body">
                <pre class="code-block__pre">
                    {tokens
                        .into_iter()
                        .map(|token| {
                            let class = token.kind.class();
                            view! { <span class=class>{token.text}</span> }
                        })
                        .collect_view()}
                </pre>
            </div>
        </div>
    }
}
