//! Static rulebook tables
//!
//! Everything in here is data transcribed from the printed Lerntabellen.
//! No logic beyond lookups lives here; evaluation and candidate selection
//! are the resolver's job.

pub mod categories;
pub mod skill_rates;
pub mod spell_rates;

pub use categories::{entries_for_skill, entry, CategoryDifficultyEntry, CATEGORY_TABLE};
pub use skill_rates::ep_per_training_unit;
pub use spell_rates::{ep_per_learning_unit, le_required};
