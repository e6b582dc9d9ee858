//! # client
//!
//! Leptos + WASM frontend for the corruption-definitions Venn explorer.
//! A single mountable page: a card grid for the four base definitions, an
//! interactive SVG Venn diagram with hoverable regions, and a detail panel
//! driven by the hover selector. All content and geometry come from the
//! `diagram` crate; this crate only renders.

pub mod app;
pub mod components;
