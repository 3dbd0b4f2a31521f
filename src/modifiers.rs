//! Race and specialization cost modifiers
//!
//! These are kept as data tables rather than branches in the pipeline so a
//! new modifier is a new row, not a new code path.

use crate::core::types::{CharClass, Race, SpellSchool};

/// Flat EP surcharge applied to learn actions (skills and spells), after the
/// base cost is computed but before any gold-for-EP conversion.
struct RacialSurcharge {
    race: Race,
    ep: u32,
}

static RACIAL_EP_SURCHARGES: &[RacialSurcharge] = &[
    // Elves learn slower than humans in this ruleset
    RacialSurcharge {
        race: Race::Elf,
        ep: 6,
    },
];

pub fn racial_ep_surcharge(race: Race) -> u32 {
    RACIAL_EP_SURCHARGES
        .iter()
        .find(|s| s.race == race)
        .map(|s| s.ep)
        .unwrap_or(0)
}

/// Per-LE rate override for a caster who has declared a school
/// specialization and is learning a spell from that school.
struct SpecializationRate {
    class: CharClass,
    ep_per_le: u32,
}

static SPECIALIZATION_RATES: &[SpecializationRate] = &[SpecializationRate {
    class: CharClass::Magier,
    ep_per_le: 30,
}];

/// The discounted EP-per-LE rate, if `class` has declared `declared` as its
/// specialty and the spell being learned belongs to that very school.
pub fn specialization_rate(
    class: CharClass,
    declared: Option<SpellSchool>,
    school: SpellSchool,
) -> Option<u32> {
    let declared = declared?;
    if declared != school {
        return None;
    }
    SPECIALIZATION_RATES
        .iter()
        .find(|r| r.class == class)
        .map(|r| r.ep_per_le)
}
