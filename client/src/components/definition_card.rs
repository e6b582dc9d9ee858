//! Card for one base definition: color dot, title, description, all examples.

#[cfg(test)]
#[path = "definition_card_test.rs"]
mod definition_card_test;

use leptos::prelude::*;

use diagram::region::Definition;

/// Inline style for the card's color dot.
fn dot_style(color: &str) -> String {
    format!("background-color: {color};")
}

/// A static card for one definition. Shows the full example list in
/// authored order, independent of whatever the diagram hover is doing.
#[component]
pub fn DefinitionCard(definition: Definition) -> impl IntoView {
    let entry = definition.entry();

    let examples = entry
        .examples
        .iter()
        .map(|ex| view! { <li class="definition-card__example">"\u{2022} " {*ex}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="definition-card">
            <div class="definition-card__header">
                <span class="definition-card__dot" style=dot_style(entry.color)></span>
                <h3 class="definition-card__title">{entry.title}</h3>
            </div>
            <p class="definition-card__description">{entry.description}</p>
            <div class="definition-card__body">
                <p class="definition-card__examples-label">"Examples:"</p>
                <ul class="definition-card__examples">{examples}</ul>
            </div>
        </div>
    }
}
