//! "Key Insight" callout shown between the card grid and the diagram.

use leptos::prelude::*;

/// Static callout with an inline info glyph.
#[component]
pub fn InsightNote() -> impl IntoView {
    view! {
        <div class="insight-note">
            <svg class="insight-note__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="8" />
                <line x1="10" y1="9" x2="10" y2="14" />
                <circle cx="10" cy="6" r="0.5" />
            </svg>
            <div class="insight-note__body">
                <p class="insight-note__label">"Key Insight:"</p>
                <p class="insight-note__text">
                    "These definitions often overlap. A single corrupt act can be analyzed \
                     through multiple lenses - legal, moral, institutional, and social - \
                     revealing different dimensions of the same phenomenon."
                </p>
            </div>
        </div>
    }
}
