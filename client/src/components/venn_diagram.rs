//! Interactive SVG Venn diagram: four overlapping definition circles plus
//! seven intersection hit-target markers, all wired to the hover selector.

#[cfg(test)]
#[path = "venn_diagram_test.rs"]
mod venn_diagram_test;

use leptos::prelude::*;

use diagram::hover::HoverState;
use diagram::layout::{VIEW_HEIGHT, VIEW_WIDTH};
use diagram::region::{Definition, Intersection, Region};

/// `viewBox` attribute for the fixed 400×300 logical space.
fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

/// The diagram. Writes the shared hover selector on mouse enter/leave;
/// every shape resets the selector on leave, so moving between shapes is
/// always leave-then-enter and the selector never goes stale.
#[component]
pub fn VennDiagram() -> impl IntoView {
    let hover = expect_context::<RwSignal<HoverState>>();

    let circles = Definition::ALL
        .into_iter()
        .map(|def| {
            let circle = def.circle();
            let entry = def.entry();
            let is_hovered = move || hover.get().current() == Some(Region::Definition(def));

            view! {
                <circle
                    class="venn-diagram__circle"
                    class:venn-diagram__circle--hovered=is_hovered
                    cx=format!("{}", circle.center.x)
                    cy=format!("{}", circle.center.y)
                    r=format!("{}", circle.radius)
                    fill=entry.color
                    stroke=entry.color
                    stroke-width="2"
                    on:mouseenter=move |_| hover.update(|h| h.enter(def.into()))
                    on:mouseleave=move |_| hover.update(HoverState::leave)
                />
                <text
                    class="venn-diagram__label"
                    x=format!("{}", circle.label.x)
                    y=format!("{}", circle.label.y)
                    text-anchor="middle"
                    fill=entry.color
                >
                    {def.label_text()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let markers = Intersection::ALL
        .into_iter()
        .map(|ix| {
            let marker = ix.marker();
            let class = if ix == Intersection::Center {
                "venn-diagram__marker venn-diagram__marker--center"
            } else {
                "venn-diagram__marker"
            };

            view! {
                <circle
                    class=class
                    cx=format!("{}", marker.center.x)
                    cy=format!("{}", marker.center.y)
                    r=format!("{}", marker.radius)
                    fill=ix.marker_fill()
                    on:mouseenter=move |_| hover.update(|h| h.enter(ix.into()))
                    on:mouseleave=move |_| hover.update(HoverState::leave)
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="venn-diagram">
            <svg class="venn-diagram__svg" viewBox=view_box()>
                {circles}
                {markers}
            </svg>
        </div>
    }
}
