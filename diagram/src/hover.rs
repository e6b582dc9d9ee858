#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::region::Region;

/// Transient hover selector: which region the pointer is over, if any.
///
/// Memoryless by design — every `enter` overwrites whatever was there, and
/// `leave` always resets to none. Starts empty on every load and is mutated
/// only by pointer enter/leave events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    region: Option<Region>,
}

/// Detail-panel view of the currently hovered region: its title and the
/// first example only. Derived fresh from the content store on every read,
/// so it can never drift from the authored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub title: &'static str,
    pub example: &'static str,
}

impl HoverState {
    /// Pointer entered `region`.
    pub fn enter(&mut self, region: Region) {
        self.region = Some(region);
    }

    /// Pointer left the diagram shapes.
    pub fn leave(&mut self) {
        self.region = None;
    }

    /// The region currently hovered, if any.
    #[must_use]
    pub fn current(self) -> Option<Region> {
        self.region
    }

    /// Detail-panel content for the current region; none when idle.
    #[must_use]
    pub fn detail(self) -> Option<Detail> {
        let region = self.region?;
        Some(Detail {
            title: region.title(),
            example: region.examples().first().copied().unwrap_or_default(),
        })
    }
}
