//! Root application component and page skeleton.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use diagram::hover::HoverState;

use crate::components::definition_grid::DefinitionGrid;
use crate::components::detail_panel::DetailPanel;
use crate::components::insight_note::InsightNote;
use crate::components::takeaways::Takeaways;
use crate::components::venn_diagram::VennDiagram;

/// Root component.
///
/// Owns the single hover selector and provides it via context: the Venn
/// diagram is its only writer, the detail panel its only reader.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let hover = RwSignal::new(HoverState::default());
    provide_context(hover);

    view! {
        <Title text="Understanding Corruption"/>

        <div class="explorer">
            <h1 class="explorer__heading">"Understanding Corruption: Multiple Definitions"</h1>

            <blockquote class="explorer__epigraph">
                "\u{201c}Corruption is not an exception but the system's internal contradiction; \
                 it is one of the motors which run our political economy, sustain our social \
                 structures, and scaffold our personal and professional relationships.\u{201d}"
            </blockquote>

            <DefinitionGrid/>
            <InsightNote/>

            <h2 class="explorer__subheading">"Interactive Venn Diagram"</h2>
            <p class="explorer__hint">
                "Hover over different areas to see examples of overlapping definitions"
            </p>

            <VennDiagram/>
            <DetailPanel/>
            <Takeaways/>
        </div>
    }
}
