//! "Key Takeaways" list closing out the page.

use leptos::prelude::*;

struct Takeaway {
    lead: &'static str,
    text: &'static str,
}

const TAKEAWAYS: &[Takeaway] = &[
    Takeaway {
        lead: "The Act:",
        text: " Legal definitions focus on what was done (bribery, embezzlement, fraud)",
    },
    Takeaway {
        lead: "The Intent:",
        text: " Moral frameworks examine the purpose (self-interest vs. public good)",
    },
    Takeaway {
        lead: "The Context:",
        text: " Institutional analysis considers where it happens (normalized in some spaces)",
    },
    Takeaway {
        lead: "The Power:",
        text: " Social analysis looks at who does it (class, caste, party affiliation)",
    },
    Takeaway {
        lead: "The System:",
        text: " \"In a capitalist society, corruption is not outside the system. It is part \
               of how capital accumulates, circulates, and escapes control.\"",
    },
];

/// Static summary list of the four lenses plus the systemic framing.
#[component]
pub fn Takeaways() -> impl IntoView {
    let items = TAKEAWAYS
        .iter()
        .map(|t| {
            view! {
                <li class="takeaways__item">
                    "\u{2022} "
                    <span class="takeaways__lead">{t.lead}</span>
                    {t.text}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="takeaways">
            <h3 class="takeaways__heading">"Key Takeaways:"</h3>
            <ul class="takeaways__list">{items}</ul>
        </div>
    }
}
