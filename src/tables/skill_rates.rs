//! EP cost of one training unit (TE) per class and skill category
//!
//! Straight transcription of the Lerntabellen: each class pays 10, 20, 30
//! or 40 EP for a single TE depending on how close the category is to its
//! profession.

use crate::core::types::{Category, CharClass};

/// Per-class EP rates for the nine skill categories
struct ClassRates {
    alltag: u32,
    freiland: u32,
    halbwelt: u32,
    kampf: u32,
    koerper: u32,
    sozial: u32,
    unterwelt: u32,
    waffen: u32,
    wissen: u32,
}

impl ClassRates {
    fn get(&self, category: Category) -> u32 {
        match category {
            Category::Alltag => self.alltag,
            Category::Freiland => self.freiland,
            Category::Halbwelt => self.halbwelt,
            Category::Kampf => self.kampf,
            Category::Koerper => self.koerper,
            Category::Sozial => self.sozial,
            Category::Unterwelt => self.unterwelt,
            // Shields and parry weapons are charged at the weapon rate;
            // the rulebook defines no separate EP column for them.
            Category::Waffen | Category::SchildParier => self.waffen,
            Category::Wissen => self.wissen,
        }
    }
}

static ASSASSINE: ClassRates = ClassRates {
    alltag: 20,
    freiland: 20,
    halbwelt: 20,
    kampf: 30,
    koerper: 10,
    sozial: 20,
    unterwelt: 10,
    waffen: 20,
    wissen: 20,
};

static BARBAR: ClassRates = ClassRates {
    alltag: 20,
    freiland: 10,
    halbwelt: 30,
    kampf: 10,
    koerper: 10,
    sozial: 30,
    unterwelt: 30,
    waffen: 20,
    wissen: 40,
};

static GLUECKSRITTER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 10,
    kampf: 20,
    koerper: 30,
    sozial: 10,
    unterwelt: 30,
    waffen: 20,
    wissen: 20,
};

static HAENDLER: ClassRates = ClassRates {
    alltag: 10,
    freiland: 20,
    halbwelt: 20,
    kampf: 20,
    koerper: 20,
    sozial: 10,
    unterwelt: 40,
    waffen: 20,
    wissen: 20,
};

static KRIEGER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 30,
    kampf: 10,
    koerper: 20,
    sozial: 20,
    unterwelt: 30,
    waffen: 10,
    wissen: 40,
};

static SPITZBUBE: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 10,
    kampf: 40,
    koerper: 10,
    sozial: 10,
    unterwelt: 10,
    waffen: 20,
    wissen: 30,
};

static WALDLAEUFER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 10,
    halbwelt: 20,
    kampf: 20,
    koerper: 10,
    sozial: 30,
    unterwelt: 30,
    waffen: 20,
    wissen: 30,
};

static BARDE: ClassRates = ClassRates {
    alltag: 10,
    freiland: 20,
    halbwelt: 20,
    kampf: 40,
    koerper: 20,
    sozial: 30,
    unterwelt: 40,
    waffen: 40,
    wissen: 10,
};

static ORDENSKRIEGER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 40,
    kampf: 10,
    koerper: 20,
    sozial: 20,
    unterwelt: 40,
    waffen: 10,
    wissen: 20,
};

static DRUIDE: ClassRates = ClassRates {
    alltag: 20,
    freiland: 10,
    halbwelt: 30,
    kampf: 40,
    koerper: 20,
    sozial: 30,
    unterwelt: 40,
    waffen: 40,
    wissen: 10,
};

static HEXER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 20,
    halbwelt: 30,
    kampf: 40,
    koerper: 30,
    sozial: 20,
    unterwelt: 30,
    waffen: 40,
    wissen: 20,
};

static MAGIER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 40,
    kampf: 40,
    koerper: 30,
    sozial: 30,
    unterwelt: 40,
    waffen: 40,
    wissen: 10,
};

static PRIESTER_BESCHUETZER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 30,
    kampf: 40,
    koerper: 30,
    sozial: 10,
    unterwelt: 40,
    waffen: 40,
    wissen: 20,
};

static PRIESTER_STREITER: ClassRates = ClassRates {
    alltag: 20,
    freiland: 30,
    halbwelt: 40,
    kampf: 30,
    koerper: 30,
    sozial: 30,
    unterwelt: 40,
    waffen: 30,
    wissen: 20,
};

static SCHAMANE: ClassRates = ClassRates {
    alltag: 20,
    freiland: 10,
    halbwelt: 40,
    kampf: 40,
    koerper: 20,
    sozial: 20,
    unterwelt: 40,
    waffen: 40,
    wissen: 20,
};

fn class_rates(class: CharClass) -> &'static ClassRates {
    match class {
        CharClass::Assassine => &ASSASSINE,
        CharClass::Barbar => &BARBAR,
        CharClass::Gluecksritter => &GLUECKSRITTER,
        CharClass::Haendler => &HAENDLER,
        CharClass::Krieger => &KRIEGER,
        CharClass::Spitzbube => &SPITZBUBE,
        CharClass::Waldlaeufer => &WALDLAEUFER,
        CharClass::Barde => &BARDE,
        CharClass::Ordenskrieger => &ORDENSKRIEGER,
        CharClass::Druide => &DRUIDE,
        CharClass::Hexer => &HEXER,
        CharClass::Magier => &MAGIER,
        CharClass::PriesterBeschuetzer => &PRIESTER_BESCHUETZER,
        CharClass::PriesterStreiter => &PRIESTER_STREITER,
        CharClass::Schamane => &SCHAMANE,
    }
}

/// EP cost of one training unit for `class` in `category`
pub fn ep_per_training_unit(class: CharClass, category: Category) -> u32 {
    class_rates(class).get(category)
}
