//! Learning-cost engine for Midgard characters
//!
//! Computes what a character pays, in learning units, experience points and
//! gold, to learn or improve skills, weapon skills and spells. The rate
//! tables are static data transcribed from the rulebook; every calculation
//! is a pure function over them plus the request, so the engine carries no
//! state and is safe to share across threads.
//!
//! The pipeline runs resolution, base pricing, practice-point and gold
//! substitution, and the reward pass in that fixed order; see
//! [`pipeline::calculate`].

pub mod catalog;
pub mod core;
pub mod modifiers;
pub mod pipeline;
pub mod resolver;
pub mod reward;
pub mod substitution;
pub mod tables;

pub use catalog::{Catalog, EntryMetadata, StaticCatalog};
pub use core::error::{LernError, Result};
pub use core::types::{
    ActionKind, Category, CharClass, Difficulty, EntityKind, Level, Race, RewardVariant,
    SpellSchool,
};
pub use pipeline::{
    calculate, improve_skill, improvement_plan, learn_skill, learn_spell, CostRequest, CostResult,
    ImprovementPlan,
};
