//! Two-column grid of the four definition cards.

use leptos::prelude::*;

use diagram::region::Definition;

use crate::components::definition_card::DefinitionCard;

/// Grid of all four definition cards, authored order.
#[component]
pub fn DefinitionGrid() -> impl IntoView {
    let cards = Definition::ALL
        .into_iter()
        .map(|definition| view! { <DefinitionCard definition/> })
        .collect::<Vec<_>>();

    view! { <div class="definition-grid">{cards}</div> }
}
