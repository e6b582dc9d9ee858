#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::region::{Definition, Intersection, Region};

/// Logical width of the diagram coordinate space.
pub const VIEW_WIDTH: f64 = 400.0;

/// Logical height of the diagram coordinate space.
pub const VIEW_HEIGHT: f64 = 300.0;

/// Radius of each definition circle.
pub const CIRCLE_RADIUS: f64 = 80.0;

/// Radius of a pairwise intersection marker.
pub const MARKER_RADIUS: f64 = 8.0;

/// Radius of the four-way center marker.
pub const CENTER_MARKER_RADIUS: f64 = 10.0;

/// Fill color for pairwise intersection markers.
pub const MARKER_FILL: &str = "#6366f1";

/// Fill color for the center marker.
pub const CENTER_MARKER_FILL: &str = "#8b5cf6";

/// A point in the diagram's logical coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    fn dist_sq(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Geometry of one definition circle plus its label anchor.
#[derive(Debug, Clone, Copy)]
pub struct CircleSpec {
    pub center: Point,
    pub radius: f64,
    /// Text anchor for the circle label, outside the crowded overlap zone.
    pub label: Point,
}

impl CircleSpec {
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.dist_sq(self.center) <= self.radius * self.radius
    }
}

/// Geometry of one intersection hit-target marker.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSpec {
    pub center: Point,
    pub radius: f64,
}

impl MarkerSpec {
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.dist_sq(self.center) <= self.radius * self.radius
    }
}

impl Definition {
    /// Circle geometry for this definition.
    ///
    /// Legal and moral sit on the top row, institutional and social on the
    /// bottom, all overlapping through the middle of the space.
    #[must_use]
    pub fn circle(self) -> CircleSpec {
        let (center, label) = match self {
            Self::Legal => (Point::new(150.0, 120.0), Point::new(150.0, 60.0)),
            Self::Moral => (Point::new(250.0, 120.0), Point::new(250.0, 60.0)),
            Self::Institutional => (Point::new(150.0, 200.0), Point::new(150.0, 270.0)),
            Self::Social => (Point::new(250.0, 200.0), Point::new(250.0, 270.0)),
        };
        CircleSpec { center, radius: CIRCLE_RADIUS, label }
    }

    /// Short label drawn above/below the circle.
    #[must_use]
    pub fn label_text(self) -> &'static str {
        match self {
            Self::Legal => "Legal",
            Self::Moral => "Moral/Ethical",
            Self::Institutional => "Institutional",
            Self::Social => "Social/Power",
        }
    }
}

impl Intersection {
    /// Marker geometry for this intersection.
    ///
    /// The adjacent-pair markers sit at the midpoint of their two circle
    /// centers. The diagonal pairs (legal+social, moral+institutional) would
    /// both land on the center point, so their markers are offset along the
    /// perpendicular of the respective center line, still inside both parent
    /// circles.
    #[must_use]
    pub fn marker(self) -> MarkerSpec {
        let (center, radius) = match self {
            Self::LegalMoral => (Point::new(200.0, 100.0), MARKER_RADIUS),
            Self::LegalInstitutional => (Point::new(150.0, 160.0), MARKER_RADIUS),
            Self::LegalSocial => (Point::new(212.0, 144.0), MARKER_RADIUS),
            Self::MoralInstitutional => (Point::new(188.0, 144.0), MARKER_RADIUS),
            Self::MoralSocial => (Point::new(250.0, 160.0), MARKER_RADIUS),
            Self::InstitutionalSocial => (Point::new(200.0, 220.0), MARKER_RADIUS),
            Self::Center => (Point::new(200.0, 160.0), CENTER_MARKER_RADIUS),
        };
        MarkerSpec { center, radius }
    }

    /// Fill color for this intersection's marker.
    #[must_use]
    pub fn marker_fill(self) -> &'static str {
        match self {
            Self::Center => CENTER_MARKER_FILL,
            _ => MARKER_FILL,
        }
    }
}

/// Resolve which region is under `pt`, matching the paint stacking order.
///
/// Markers are painted after the circles, so they win; the center marker is
/// painted last of all. Among overlapping circles the later-painted one
/// (social, then institutional, then moral, then legal) takes the point.
#[must_use]
pub fn hit_test(pt: Point) -> Option<Region> {
    if Intersection::Center.marker().contains(pt) {
        return Some(Intersection::Center.into());
    }
    for ix in Intersection::ALL {
        if ix != Intersection::Center && ix.marker().contains(pt) {
            return Some(ix.into());
        }
    }
    for def in Definition::ALL.into_iter().rev() {
        if def.circle().contains(pt) {
            return Some(def.into());
        }
    }
    None
}
