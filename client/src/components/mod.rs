//! Page components.
//!
//! One module per component, mirroring the page top-to-bottom: the card
//! grid, the insight callout, the Venn diagram, the hover detail panel,
//! and the takeaways list.

pub mod definition_card;
pub mod definition_grid;
pub mod detail_panel;
pub mod insight_note;
pub mod takeaways;
pub mod venn_diagram;
