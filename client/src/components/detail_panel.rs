//! Detail panel for the currently hovered region.

use leptos::prelude::*;

use diagram::hover::HoverState;

/// Shows the hovered region's title and its first example; renders nothing
/// at all while the selector is empty. Content is looked up from the
/// content store on every render, never cached here.
#[component]
pub fn DetailPanel() -> impl IntoView {
    let hover = expect_context::<RwSignal<HoverState>>();

    view! {
        {move || {
            hover.get().detail().map(|detail| {
                view! {
                    <div class="detail-panel">
                        <h3 class="detail-panel__title">{detail.title}</h3>
                        <p class="detail-panel__example">
                            <span class="detail-panel__example-label">"Example: "</span>
                            {detail.example}
                        </p>
                    </div>
                }
            })
        }}
    }
}
