use super::views::{
    BreedGroup, BreedReferencePage, HouseholdSection, ImpactCallout, ImpactReferencePage,
    ImpactRow, MultiCatReferencePage,
};
use crate::i18n::{text, Locale};

// Breed names are proper nouns and render untranslated.
const HIGH_ENERGY_BREEDS: &[&str] = &[
    "Bengal",
    "Abyssinian",
    "Siamese",
    "Oriental Shorthair",
    "Devon Rex",
    "Savannah",
];

const MEDIUM_ENERGY_BREEDS: &[&str] = &[
    "American Shorthair",
    "British Shorthair",
    "Scottish Fold",
    "Munchkin",
    "Maine Coon",
];

const LOW_ENERGY_BREEDS: &[&str] = &["Persian", "Ragdoll", "Exotic Shorthair", "Chartreux"];

const MIXED_BREEDS: &[&str] = &["Domestic Shorthair", "Domestic Longhair"];

struct ImpactRowTemplate {
    behavior_key: &'static str,
    description_key: &'static str,
    multiplier: &'static str,
    impact: &'static str,
}

// Equivalent forces relative to the 4.5 kg median-weight reference cat.
const IMPACT_ROWS: &[ImpactRowTemplate] = &[
    ImpactRowTemplate {
        behavior_key: "ref3.static",
        description_key: "ref3.staticDesc",
        multiplier: "1x",
        impact: "~4.5 kg",
    },
    ImpactRowTemplate {
        behavior_key: "ref3.climb",
        description_key: "ref3.climbDesc",
        multiplier: "2-3x",
        impact: "~9-13.5 kg",
    },
    ImpactRowTemplate {
        behavior_key: "ref3.rush",
        description_key: "ref3.rushDesc",
        multiplier: "8-12x",
        impact: "~36-54 kg",
    },
    ImpactRowTemplate {
        behavior_key: "ref3.scratch",
        description_key: "ref3.scratchDesc",
        multiplier: "-",
        impact: "point load",
    },
];

pub(super) fn build_breed_page(locale: Locale) -> BreedReferencePage {
    let group = |title_key: &str, breeds: &[&'static str]| BreedGroup {
        title: text(locale, title_key).to_string(),
        breeds: breeds.to_vec(),
    };

    BreedReferencePage {
        title: text(locale, "ref1.title").to_string(),
        description: text(locale, "ref1.desc").to_string(),
        groups: vec![
            group("ref1.high", HIGH_ENERGY_BREEDS),
            group("ref1.medium", MEDIUM_ENERGY_BREEDS),
            group("ref1.low", LOW_ENERGY_BREEDS),
            group("ref1.mixed", MIXED_BREEDS),
        ],
        note: text(locale, "ref1.note").to_string(),
    }
}

pub(super) fn build_multi_cat_page(locale: Locale) -> MultiCatReferencePage {
    let section = |title_key: &str, point_keys: [&str; 2]| HouseholdSection {
        title: text(locale, title_key).to_string(),
        points: point_keys
            .into_iter()
            .map(|key| text(locale, key).to_string())
            .collect(),
    };

    MultiCatReferencePage {
        title: text(locale, "ref2.title").to_string(),
        description: text(locale, "ref2.desc").to_string(),
        sections: vec![
            section("ref2.single", ["ref2.single.pt1", "ref2.single.pt2"]),
            section("ref2.double", ["ref2.double.pt1", "ref2.double.pt2"]),
            section("ref2.multiple", ["ref2.multiple.pt1", "ref2.multiple.pt2"]),
        ],
        note: text(locale, "ref2.note").to_string(),
    }
}

pub(super) fn build_impact_page(locale: Locale) -> ImpactReferencePage {
    let rows = IMPACT_ROWS
        .iter()
        .map(|template| ImpactRow {
            behavior: text(locale, template.behavior_key).to_string(),
            multiplier: template.multiplier,
            impact: template.impact,
            description: text(locale, template.description_key).to_string(),
        })
        .collect();

    let callout = |title_key: &str, detail_key: &str| ImpactCallout {
        title: text(locale, title_key).to_string(),
        detail: text(locale, detail_key).to_string(),
    };

    ImpactReferencePage {
        title: text(locale, "ref3.title").to_string(),
        description: text(locale, "ref3.desc").to_string(),
        basis: text(locale, "ref3.basis").to_string(),
        columns: [
            text(locale, "ref3.behavior").to_string(),
            text(locale, "ref3.multiplier").to_string(),
            text(locale, "ref3.impact").to_string(),
            text(locale, "ref3.description").to_string(),
        ],
        rows,
        callouts: vec![
            callout("ref3.extreme", "ref3.extremeDesc"),
            callout("ref3.wear", "ref3.wearDesc"),
        ],
        disclaimer: text(locale, "ref3.disclaimer").to_string(),
        footer: text(locale, "ref3.footer").to_string(),
    }
}
