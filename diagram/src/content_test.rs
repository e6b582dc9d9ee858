use super::*;

use crate::region::{Definition, Intersection, Region};

// --- Definition entries ---

#[test]
fn definition_titles() {
    assert_eq!(Definition::Legal.entry().title, "Legal Definition");
    assert_eq!(Definition::Moral.entry().title, "Moral/Ethical Definition");
    assert_eq!(Definition::Institutional.entry().title, "Institutional Definition");
    assert_eq!(Definition::Social.entry().title, "Social/Power Definition");
}

#[test]
fn definition_colors_are_hex() {
    for def in Definition::ALL {
        let color = def.entry().color;
        assert!(color.starts_with('#'), "{def:?}: {color}");
        assert_eq!(color.len(), 7, "{def:?}: {color}");
    }
}

#[test]
fn definition_colors_are_distinct() {
    for (i, a) in Definition::ALL.iter().enumerate() {
        for (j, b) in Definition::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.entry().color, b.entry().color);
            }
        }
    }
}

#[test]
fn every_definition_has_three_examples() {
    for def in Definition::ALL {
        assert_eq!(def.entry().examples.len(), 3, "{def:?}");
    }
}

#[test]
fn legal_examples_in_authored_order() {
    let examples = Definition::Legal.entry().examples;
    assert_eq!(
        examples[0],
        "Bribery: A government official accepting money to approve a construction permit"
    );
    assert_eq!(
        examples[1],
        "Embezzlement: A public servant siphoning funds from a development project"
    );
    assert_eq!(examples[2], "Fraud: Falsifying documents to win a government contract");
}

#[test]
fn every_definition_has_a_description() {
    for def in Definition::ALL {
        assert!(!def.entry().description.is_empty(), "{def:?}");
    }
}

// --- Intersection entries ---

#[test]
fn every_intersection_has_one_example() {
    for ix in Intersection::ALL {
        assert_eq!(ix.entry().examples.len(), 1, "{ix:?}");
    }
}

#[test]
fn intersection_titles() {
    assert_eq!(Intersection::LegalMoral.entry().title, "Legal + Moral");
    assert_eq!(Intersection::LegalInstitutional.entry().title, "Legal + Institutional");
    assert_eq!(Intersection::LegalSocial.entry().title, "Legal + Social");
    assert_eq!(Intersection::MoralInstitutional.entry().title, "Moral + Institutional");
    assert_eq!(Intersection::MoralSocial.entry().title, "Moral + Social");
    assert_eq!(Intersection::InstitutionalSocial.entry().title, "Institutional + Social");
    assert_eq!(Intersection::Center.entry().title, "All Definitions");
}

#[test]
fn center_example_text() {
    assert_eq!(
        Intersection::Center.entry().examples[0],
        "A powerful official embezzling public funds intended for marginalized communities"
    );
}

// --- Region lookups ---

#[test]
fn region_title_matches_entry_title() {
    for region in Region::ALL {
        let expected = match region {
            Region::Definition(def) => def.entry().title,
            Region::Intersection(ix) => ix.entry().title,
        };
        assert_eq!(region.title(), expected);
    }
}

#[test]
fn every_region_has_at_least_one_example() {
    for region in Region::ALL {
        assert!(!region.examples().is_empty(), "{}", region.key());
    }
}

#[test]
fn region_titles_are_distinct() {
    for (i, a) in Region::ALL.iter().enumerate() {
        for (j, b) in Region::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.title(), b.title());
            }
        }
    }
}
