#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use serde::{Deserialize, Serialize};

/// One of the four base definition lenses, each drawn as a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Definition {
    Legal,
    Moral,
    Institutional,
    Social,
}

impl Definition {
    /// All four definitions in card-grid (authored) order.
    pub const ALL: [Self; 4] = [Self::Legal, Self::Moral, Self::Institutional, Self::Social];
}

/// A pairwise overlap between two definitions, or the four-way center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intersection {
    LegalMoral,
    LegalInstitutional,
    LegalSocial,
    MoralInstitutional,
    MoralSocial,
    InstitutionalSocial,
    Center,
}

impl Intersection {
    /// All seven intersections in authored order.
    pub const ALL: [Self; 7] = [
        Self::LegalMoral,
        Self::LegalInstitutional,
        Self::LegalSocial,
        Self::MoralInstitutional,
        Self::MoralSocial,
        Self::InstitutionalSocial,
        Self::Center,
    ];

    /// The definitions whose circles this intersection lies inside.
    #[must_use]
    pub fn parents(self) -> &'static [Definition] {
        match self {
            Self::LegalMoral => &[Definition::Legal, Definition::Moral],
            Self::LegalInstitutional => &[Definition::Legal, Definition::Institutional],
            Self::LegalSocial => &[Definition::Legal, Definition::Social],
            Self::MoralInstitutional => &[Definition::Moral, Definition::Institutional],
            Self::MoralSocial => &[Definition::Moral, Definition::Social],
            Self::InstitutionalSocial => &[Definition::Institutional, Definition::Social],
            Self::Center => &Definition::ALL,
        }
    }
}

/// Any hoverable region of the diagram.
///
/// The set is closed: 4 definitions + 7 intersections, nothing else. Keeping
/// this a sum type makes every content lookup an exhaustive match rather
/// than a map access that can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Region {
    Definition(Definition),
    Intersection(Intersection),
}

impl Region {
    /// All eleven regions: definitions first, then intersections.
    pub const ALL: [Self; 11] = [
        Self::Definition(Definition::Legal),
        Self::Definition(Definition::Moral),
        Self::Definition(Definition::Institutional),
        Self::Definition(Definition::Social),
        Self::Intersection(Intersection::LegalMoral),
        Self::Intersection(Intersection::LegalInstitutional),
        Self::Intersection(Intersection::LegalSocial),
        Self::Intersection(Intersection::MoralInstitutional),
        Self::Intersection(Intersection::MoralSocial),
        Self::Intersection(Intersection::InstitutionalSocial),
        Self::Intersection(Intersection::Center),
    ];

    /// Stable camelCase key, matching the serde form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Definition(Definition::Legal) => "legal",
            Self::Definition(Definition::Moral) => "moral",
            Self::Definition(Definition::Institutional) => "institutional",
            Self::Definition(Definition::Social) => "social",
            Self::Intersection(Intersection::LegalMoral) => "legalMoral",
            Self::Intersection(Intersection::LegalInstitutional) => "legalInstitutional",
            Self::Intersection(Intersection::LegalSocial) => "legalSocial",
            Self::Intersection(Intersection::MoralInstitutional) => "moralInstitutional",
            Self::Intersection(Intersection::MoralSocial) => "moralSocial",
            Self::Intersection(Intersection::InstitutionalSocial) => "institutionalSocial",
            Self::Intersection(Intersection::Center) => "center",
        }
    }
}

impl From<Definition> for Region {
    fn from(def: Definition) -> Self {
        Self::Definition(def)
    }
}

impl From<Intersection> for Region {
    fn from(ix: Intersection) -> Self {
        Self::Intersection(ix)
    }
}
