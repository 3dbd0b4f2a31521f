use crate::core::types::{ActionKind, CharClass, EntityKind, Level, SpellSchool};
use thiserror::Error;

/// Errors surfaced by the learning-cost engine.
///
/// All of these are deterministic for a given request: nothing here is
/// retryable, and a failed calculation leaves no partial state behind.
#[derive(Error, Debug)]
pub enum LernError {
    #[error("unknown character class: {0}")]
    UnknownClass(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown spell school: {0}")]
    UnknownSchool(String),

    #[error("unknown race: {0}")]
    UnknownRace(String),

    #[error("unknown action: {0} (expected learn or improve)")]
    UnknownAction(String),

    #[error("unknown entity kind: {0} (expected skill, spell or weapon)")]
    UnknownEntityKind(String),

    #[error("unknown reward variant: {0}")]
    UnknownReward(String),

    /// The external catalog knows nothing under this name, or the name is
    /// filed in no category of the rate tables.
    #[error("unknown skill or spell: {0}")]
    UnknownSkillOrSpell(String),

    /// The skill exists but no category/difficulty combination is usable
    /// by the acting class. The built-in rate tables carry a rate for
    /// every class, so this surfaces when a catalog pins a filing the
    /// tables do not offer.
    #[error("{class} cannot learn or improve '{skill}' via any known category")]
    NoFeasibleCategory { class: CharClass, skill: String },

    /// The level transition falls outside the sparse improvement table.
    #[error("no improvement rule for '{skill}' from level {from} to {to}")]
    NoRuleForLevel {
        skill: String,
        from: Level,
        to: Level,
    },

    /// Spell metadata carried a level of zero or below. Treated as upstream
    /// data corruption, not as a normal lookup miss.
    #[error("invalid spell level {level} for '{spell}'")]
    InvalidSpellLevel { spell: String, level: i32 },

    /// The class's EP-per-LE rate for the spell's school is zero or absent.
    #[error("{class} cannot learn spells from the {school} school")]
    SchoolUnavailable {
        class: CharClass,
        school: SpellSchool,
    },

    /// The engine computes exactly one level step at a time.
    #[error("target level {target} must be current level {current} + 1")]
    InvalidTargetLevel { current: Level, target: Level },

    #[error("unsupported action {action:?} for {kind:?}")]
    UnsupportedAction {
        action: ActionKind,
        kind: EntityKind,
    },

    #[error("catalog file error: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LernError>;
