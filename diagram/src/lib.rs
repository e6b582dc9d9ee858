//! Model crate for the corruption-definitions Venn explorer.
//!
//! Owns everything the UI layer derives its markup from: the closed set of
//! hoverable regions, the immutable content store, the diagram geometry in
//! the 400×300 logical space, and the hover selector. No DOM types live
//! here, so the whole crate unit-tests on the host target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`region`] | Closed region identifiers (4 definitions + 7 intersections) |
//! | [`content`] | Static region → display-content lookup |
//! | [`layout`] | Circle/marker geometry and point hit-testing |
//! | [`hover`] | Transient hover selector and detail derivation |

pub mod content;
pub mod hover;
pub mod layout;
pub mod region;
