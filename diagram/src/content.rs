#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::region::{Definition, Intersection, Region};

/// Display content for one of the four base definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionEntry {
    pub title: &'static str,
    /// Hex fill/stroke color for the card dot and the diagram circle.
    pub color: &'static str,
    pub description: &'static str,
    /// Full example list, authored order. The card grid shows all of these;
    /// the detail panel shows only the first.
    pub examples: &'static [&'static str],
}

/// Display content for an intersection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub title: &'static str,
    pub examples: &'static [&'static str],
}

static LEGAL: DefinitionEntry = DefinitionEntry {
    title: "Legal Definition",
    color: "#3b82f6",
    description: "Focuses on the ACT - breach of law",
    examples: &[
        "Bribery: A government official accepting money to approve a construction permit",
        "Embezzlement: A public servant siphoning funds from a development project",
        "Fraud: Falsifying documents to win a government contract",
    ],
};

static MORAL: DefinitionEntry = DefinitionEntry {
    title: "Moral/Ethical Definition",
    color: "#ef4444",
    description: "Focuses on the INTENT - self-interest vs public good",
    examples: &[
        "A politician prioritizing party donors over constituents' needs",
        "Breaking the sanctity of social, kinship, or economic relations",
        "Violating accepted norms and religious codes of conduct",
    ],
};

static INSTITUTIONAL: DefinitionEntry = DefinitionEntry {
    title: "Institutional Definition",
    color: "#10b981",
    description: "Focuses on WHERE it happens - context matters",
    examples: &[
        "Electoral finance (normalized in politics but questioned in bureaucracy)",
        "Corporate lobbying (legal in some contexts, corrupt in others)",
        "Nepotism in hiring (varies by institution and culture)",
    ],
};

static SOCIAL: DefinitionEntry = DefinitionEntry {
    title: "Social/Power Definition",
    color: "#f59e0b",
    description: "Focuses on WHO does it - power dynamics",
    examples: &[
        "A poor person stealing food vs. a politician embezzling millions",
        "Caste/class affecting judgment of the same act",
        "Elite tax evasion vs. welfare fraud by the poor",
    ],
};

static LEGAL_MORAL: IntersectionEntry = IntersectionEntry {
    title: "Legal + Moral",
    examples: &["A judge accepting bribes (breaks law AND violates trust)"],
};

static LEGAL_INSTITUTIONAL: IntersectionEntry = IntersectionEntry {
    title: "Legal + Institutional",
    examples: &["Campaign finance violations (law + political context)"],
};

static LEGAL_SOCIAL: IntersectionEntry = IntersectionEntry {
    title: "Legal + Social",
    examples: &["Selective prosecution based on caste/class"],
};

static MORAL_INSTITUTIONAL: IntersectionEntry = IntersectionEntry {
    title: "Moral + Institutional",
    examples: &["Normalized practices like 'speed money' in bureaucracy"],
};

static MORAL_SOCIAL: IntersectionEntry = IntersectionEntry {
    title: "Moral + Social",
    examples: &["Nepotism judged differently for powerful vs. marginalized"],
};

static INSTITUTIONAL_SOCIAL: IntersectionEntry = IntersectionEntry {
    title: "Institutional + Social",
    examples: &["Corporate boards dominated by privileged networks"],
};

static CENTER: IntersectionEntry = IntersectionEntry {
    title: "All Definitions",
    examples: &["A powerful official embezzling public funds intended for marginalized communities"],
};

impl Definition {
    /// Content for this definition. Total: the match is exhaustive.
    #[must_use]
    pub fn entry(self) -> &'static DefinitionEntry {
        match self {
            Self::Legal => &LEGAL,
            Self::Moral => &MORAL,
            Self::Institutional => &INSTITUTIONAL,
            Self::Social => &SOCIAL,
        }
    }
}

impl Intersection {
    /// Content for this intersection. Total: the match is exhaustive.
    #[must_use]
    pub fn entry(self) -> &'static IntersectionEntry {
        match self {
            Self::LegalMoral => &LEGAL_MORAL,
            Self::LegalInstitutional => &LEGAL_INSTITUTIONAL,
            Self::LegalSocial => &LEGAL_SOCIAL,
            Self::MoralInstitutional => &MORAL_INSTITUTIONAL,
            Self::MoralSocial => &MORAL_SOCIAL,
            Self::InstitutionalSocial => &INSTITUTIONAL_SOCIAL,
            Self::Center => &CENTER,
        }
    }
}

impl Region {
    /// Panel title for this region.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Definition(def) => def.entry().title,
            Self::Intersection(ix) => ix.entry().title,
        }
    }

    /// Full example list for this region, authored order.
    #[must_use]
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            Self::Definition(def) => def.entry().examples,
            Self::Intersection(ix) => ix.entry().examples,
        }
    }
}
