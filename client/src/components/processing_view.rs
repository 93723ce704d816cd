//! Live view of the primary timeline: progress plus the three lists.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `GenerationState` signal that the home page's playback
//! mutates. Each section appears once its list is non-empty, and the scroll
//! container follows new entries.

use leptos::prelude::*;
use timeline::GenerationState;
use timeline::display::{design_rows, file_rows};

use crate::components::code_block::CodeBlock;
use crate::components::design_system_item::DesignSystemItem;
use crate::components::file_item::FileItem;
use crate::components::progress_bar::ProgressBar;

#[component]
pub fn ProcessingView() -> impl IntoView {
    let generation = expect_context::<RwSignal<GenerationState>>();
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    let progress = Signal::derive(move || generation.with(|g| g.progress));
    let has_design = move || generation.with(|g| !g.design_system.is_empty());
    let has_files = move || generation.with(|g| !g.files.is_empty());
    let has_snippets = move || generation.with(|g| !g.snippets.is_empty());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        // Track list lengths only; status flips do not scroll.
        let _ = generation.with(|g| (g.design_system.len(), g.files.len(), g.snippets.len()));
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div class="processing">
            <div class="processing__head">
                <div class="processing__title-row">
                    <h2 class="processing__title">"Generating your code"</h2>
                    <span class="processing__percent">{move || format!("{}%", progress.get())}</span>
                </div>
                <ProgressBar progress=progress/>
            </div>

            <div class="processing__scroll" node_ref=scroll_ref>
                <Show when=has_design>
                    <section class="processing__section">
                        <h3 class="section-title section-title--primary">"Design System"</h3>
                        <div class="processing__list">
                            <For
                                each=move || generation.with(|g| design_rows(&g.design_system))
                                key=|row| (row.id, row.state_class)
                                children=|row| view! { <DesignSystemItem row=row/> }
                            />
                        </div>
                    </section>
                </Show>

                <Show when=has_files>
                    <section class="processing__section">
                        <h3 class="section-title section-title--secondary">"Generated Files"</h3>
                        <div class="processing__list">
                            <For
                                each=move || generation.with(|g| file_rows(&g.files))
                                key=|row| (row.id, row.state_class)
                                children=|row| view! { <FileItem row=row/> }
                            />
                        </div>
                    </section>
                </Show>

                <Show when=has_snippets>
                    <section class="processing__section">
                        <h3 class="section-title section-title--green">"Code Preview"</h3>
                        <div class="processing__snippets">
                            <For
                                each=move || generation.with(|g| g.snippets.clone())
                                key=|snippet| snippet.id
                                children=|snippet| {
                                    view! {
                                        <CodeBlock
                                            code=snippet.code
                                            language=snippet.language
                                            title=snippet.title
                                        />
                                    }
                                }
                            />
                        </div>
                    </section>
                </Show>
            </div>
        </div>
    }
}
