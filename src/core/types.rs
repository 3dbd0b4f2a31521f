//! Core type definitions used throughout the codebase
//!
//! The rulebook keys its tables by free-form strings (class abbreviations,
//! category names). Here every key is a closed sum type so an invalid key is
//! a compile error or a parse error at the boundary, never a silent lookup
//! miss deep inside a cost calculation.

use crate::core::error::LernError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skill or spell level / Fertigkeitswert. The improvement tables top out
/// at 18, weapon tables start at 6.
pub type Level = u8;

/// Character classes, serialized as the rulebook's two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    #[serde(rename = "As")]
    Assassine,
    #[serde(rename = "Bb")]
    Barbar,
    #[serde(rename = "Gl")]
    Gluecksritter,
    #[serde(rename = "Hä")]
    Haendler,
    #[serde(rename = "Kr")]
    Krieger,
    #[serde(rename = "Sp")]
    Spitzbube,
    #[serde(rename = "Wa")]
    Waldlaeufer,
    #[serde(rename = "Ba")]
    Barde,
    #[serde(rename = "Or")]
    Ordenskrieger,
    #[serde(rename = "Dr")]
    Druide,
    #[serde(rename = "Hx")]
    Hexer,
    #[serde(rename = "Ma")]
    Magier,
    #[serde(rename = "PB")]
    PriesterBeschuetzer,
    #[serde(rename = "PS")]
    PriesterStreiter,
    #[serde(rename = "Sc")]
    Schamane,
}

impl CharClass {
    pub const ALL: [CharClass; 15] = [
        CharClass::Assassine,
        CharClass::Barbar,
        CharClass::Gluecksritter,
        CharClass::Haendler,
        CharClass::Krieger,
        CharClass::Spitzbube,
        CharClass::Waldlaeufer,
        CharClass::Barde,
        CharClass::Ordenskrieger,
        CharClass::Druide,
        CharClass::Hexer,
        CharClass::Magier,
        CharClass::PriesterBeschuetzer,
        CharClass::PriesterStreiter,
        CharClass::Schamane,
    ];

    /// Two-letter rulebook code ("Kr", "Hx", ...)
    pub fn code(self) -> &'static str {
        match self {
            CharClass::Assassine => "As",
            CharClass::Barbar => "Bb",
            CharClass::Gluecksritter => "Gl",
            CharClass::Haendler => "Hä",
            CharClass::Krieger => "Kr",
            CharClass::Spitzbube => "Sp",
            CharClass::Waldlaeufer => "Wa",
            CharClass::Barde => "Ba",
            CharClass::Ordenskrieger => "Or",
            CharClass::Druide => "Dr",
            CharClass::Hexer => "Hx",
            CharClass::Magier => "Ma",
            CharClass::PriesterBeschuetzer => "PB",
            CharClass::PriesterStreiter => "PS",
            CharClass::Schamane => "Sc",
        }
    }

    /// Full class name as printed in the rulebook
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Assassine => "Assassine",
            CharClass::Barbar => "Barbar",
            CharClass::Gluecksritter => "Glücksritter",
            CharClass::Haendler => "Händler",
            CharClass::Krieger => "Krieger",
            CharClass::Spitzbube => "Spitzbube",
            CharClass::Waldlaeufer => "Waldläufer",
            CharClass::Barde => "Barde",
            CharClass::Ordenskrieger => "Ordenskrieger",
            CharClass::Druide => "Druide",
            CharClass::Hexer => "Hexer",
            CharClass::Magier => "Magier",
            CharClass::PriesterBeschuetzer => "Priester Beschützer",
            CharClass::PriesterStreiter => "Priester Streiter",
            CharClass::Schamane => "Schamane",
        }
    }

    /// Classes with a spell-school rate table. Everyone else gets
    /// `SchoolUnavailable` for any school.
    pub fn is_caster(self) -> bool {
        matches!(
            self,
            CharClass::Druide
                | CharClass::Hexer
                | CharClass::Magier
                | CharClass::PriesterBeschuetzer
                | CharClass::PriesterStreiter
                | CharClass::Schamane
                | CharClass::Barde
        )
    }
}

impl FromStr for CharClass {
    type Err = LernError;

    /// Accepts both the code ("Kr") and the full name ("Krieger").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharClass::ALL
            .iter()
            .copied()
            .find(|c| c.code() == s || c.name() == s)
            .ok_or_else(|| LernError::UnknownClass(s.to_string()))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skill categories. `SchildParier` covers the separate shield/parry-weapon
/// improvement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Alltag,
    Freiland,
    Halbwelt,
    Kampf,
    #[serde(rename = "Körper")]
    Koerper,
    Sozial,
    Unterwelt,
    Waffen,
    Wissen,
    #[serde(rename = "Schilde und Parierwaffen")]
    SchildParier,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Alltag,
        Category::Freiland,
        Category::Halbwelt,
        Category::Kampf,
        Category::Koerper,
        Category::Sozial,
        Category::Unterwelt,
        Category::Waffen,
        Category::Wissen,
        Category::SchildParier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Alltag => "Alltag",
            Category::Freiland => "Freiland",
            Category::Halbwelt => "Halbwelt",
            Category::Kampf => "Kampf",
            Category::Koerper => "Körper",
            Category::Sozial => "Sozial",
            Category::Unterwelt => "Unterwelt",
            Category::Waffen => "Waffen",
            Category::Wissen => "Wissen",
            Category::SchildParier => "Schilde und Parierwaffen",
        }
    }
}

impl FromStr for Category {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| LernError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty grade within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "leicht")]
    Leicht,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "schwer")]
    Schwer,
    #[serde(rename = "sehr schwer")]
    SehrSchwer,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Leicht,
        Difficulty::Normal,
        Difficulty::Schwer,
        Difficulty::SehrSchwer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Leicht => "leicht",
            Difficulty::Normal => "normal",
            Difficulty::Schwer => "schwer",
            Difficulty::SehrSchwer => "sehr schwer",
        }
    }
}

impl FromStr for Difficulty {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the older data files spell it with an underscore
        let s = if s == "sehr_schwer" { "sehr schwer" } else { s };
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| LernError::UnknownDifficulty(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ten spell schools (Zauberschulen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellSchool {
    Beherrschen,
    Bewegen,
    Erkennen,
    Erschaffen,
    Formen,
    #[serde(rename = "Verändern")]
    Veraendern,
    #[serde(rename = "Zerstören")]
    Zerstoeren,
    Wunder,
    Dweomer,
    Lied,
}

impl SpellSchool {
    pub const ALL: [SpellSchool; 10] = [
        SpellSchool::Beherrschen,
        SpellSchool::Bewegen,
        SpellSchool::Erkennen,
        SpellSchool::Erschaffen,
        SpellSchool::Formen,
        SpellSchool::Veraendern,
        SpellSchool::Zerstoeren,
        SpellSchool::Wunder,
        SpellSchool::Dweomer,
        SpellSchool::Lied,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpellSchool::Beherrschen => "Beherrschen",
            SpellSchool::Bewegen => "Bewegen",
            SpellSchool::Erkennen => "Erkennen",
            SpellSchool::Erschaffen => "Erschaffen",
            SpellSchool::Formen => "Formen",
            SpellSchool::Veraendern => "Verändern",
            SpellSchool::Zerstoeren => "Zerstören",
            SpellSchool::Wunder => "Wunder",
            SpellSchool::Dweomer => "Dweomer",
            SpellSchool::Lied => "Lied",
        }
    }
}

impl FromStr for SpellSchool {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpellSchool::ALL
            .iter()
            .copied()
            .find(|sc| sc.name() == s)
            .ok_or_else(|| LernError::UnknownSchool(s.to_string()))
    }
}

impl fmt::Display for SpellSchool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playable races. Only `Elf` currently carries a cost modifier, see
/// [`crate::modifiers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Mensch,
    Elf,
    Zwerg,
    Gnom,
    Halbling,
}

impl Race {
    pub const ALL: [Race; 5] = [
        Race::Mensch,
        Race::Elf,
        Race::Zwerg,
        Race::Gnom,
        Race::Halbling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Race::Mensch => "Mensch",
            Race::Elf => "Elf",
            Race::Zwerg => "Zwerg",
            Race::Gnom => "Gnom",
            Race::Halbling => "Halbling",
        }
    }
}

impl FromStr for Race {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| LernError::UnknownRace(s.to_string()))
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the character wants to do with the skill or spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Learn,
    Improve,
}

impl FromStr for ActionKind {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "learn" => Ok(ActionKind::Learn),
            "improve" => Ok(ActionKind::Improve),
            _ => Err(LernError::UnknownAction(s.to_string())),
        }
    }
}

/// What kind of entry the request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Skill,
    Spell,
    WeaponSkill,
}

impl FromStr for EntityKind {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill" => Ok(EntityKind::Skill),
            "spell" => Ok(EntityKind::Spell),
            "weapon" | "weaponSkill" => Ok(EntityKind::WeaponSkill),
            _ => Err(LernError::UnknownEntityKind(s.to_string())),
        }
    }
}

/// Reward variants handed out by game masters. Serialized with the wire
/// spellings the original frontend sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RewardVariant {
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Skill learning only: gold cost waived
    #[serde(rename = "noGold")]
    NoGold,
    /// EP halved (integer division)
    #[serde(rename = "halveep")]
    HalveEp,
    /// EP halved and gold waived
    #[serde(rename = "halveepnoGold")]
    HalveEpNoGold,
    /// Spell learning from a scroll: flat 20 gold, a third of the EP
    #[serde(rename = "spruchrolle")]
    Spruchrolle,
}

impl FromStr for RewardVariant {
    type Err = LernError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(RewardVariant::Default),
            "noGold" => Ok(RewardVariant::NoGold),
            "halveep" => Ok(RewardVariant::HalveEp),
            "halveepnoGold" => Ok(RewardVariant::HalveEpNoGold),
            "spruchrolle" => Ok(RewardVariant::Spruchrolle),
            _ => Err(LernError::UnknownReward(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_roundtrip_code_and_name() {
        for class in CharClass::ALL {
            assert_eq!(class.code().parse::<CharClass>().unwrap(), class);
            assert_eq!(class.name().parse::<CharClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_class_serde_uses_codes() {
        let json = serde_json::to_string(&CharClass::Krieger).unwrap();
        assert_eq!(json, "\"Kr\"");
        let back: CharClass = serde_json::from_str("\"Hx\"").unwrap();
        assert_eq!(back, CharClass::Hexer);
    }

    #[test]
    fn test_unknown_class_is_error() {
        assert!(matches!(
            "Zz".parse::<CharClass>(),
            Err(LernError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_difficulty_parses_underscore_variant() {
        assert_eq!(
            "sehr_schwer".parse::<Difficulty>().unwrap(),
            Difficulty::SehrSchwer
        );
        assert_eq!(
            "sehr schwer".parse::<Difficulty>().unwrap(),
            Difficulty::SehrSchwer
        );
    }

    #[test]
    fn test_category_umlaut_spelling() {
        assert_eq!("Körper".parse::<Category>().unwrap(), Category::Koerper);
        let json = serde_json::to_string(&Category::Koerper).unwrap();
        assert_eq!(json, "\"Körper\"");
    }

    #[test]
    fn test_reward_wire_spellings() {
        assert_eq!(
            "halveepnoGold".parse::<RewardVariant>().unwrap(),
            RewardVariant::HalveEpNoGold
        );
        let json = serde_json::to_string(&RewardVariant::Spruchrolle).unwrap();
        assert_eq!(json, "\"spruchrolle\"");
    }

    #[test]
    fn test_caster_classification() {
        assert!(CharClass::Magier.is_caster());
        assert!(CharClass::Barde.is_caster());
        assert!(!CharClass::Krieger.is_caster());
        assert!(!CharClass::Assassine.is_caster());
    }
}
