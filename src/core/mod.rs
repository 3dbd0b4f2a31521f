pub mod error;
pub mod types;

pub use error::{LernError, Result};
pub use types::{
    ActionKind, Category, CharClass, Difficulty, EntityKind, Level, Race, RewardVariant,
    SpellSchool,
};
