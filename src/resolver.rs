//! Category/difficulty resolution
//!
//! A skill may be filed under several category/difficulty rows; which one a
//! character uses depends on the class's rates and, for improvement, on the
//! level transition. The resolver scans every row that files the skill,
//! scores each with a caller-supplied evaluation, and picks the cheapest.
//! Infeasible rows are excluded from the comparison, never penalized.

use crate::core::error::{LernError, Result};
use crate::core::types::{Category, CharClass, Level};
use crate::tables::categories::{self, CategoryDifficultyEntry};
use crate::tables::skill_rates;

/// Scan all rows filing `skill`, score them with `eval`, return the
/// cheapest feasible one. Ties go to the first row in table order.
///
/// `eval` returning `None` excludes the row from the comparison; with the
/// rate table total over classes the only exclusion source is a sparse
/// level map without the requested transition, so an all-excluded scan
/// reads as a missing level rule.
///
/// `explicit_category` restricts the scan to that category; a skill that is
/// not filed there at all reads as unknown.
pub fn resolve<F>(
    skill: &str,
    current: Level,
    target: Level,
    explicit_category: Option<Category>,
    eval: F,
) -> Result<&'static CategoryDifficultyEntry>
where
    F: Fn(&'static CategoryDifficultyEntry) -> Option<u64>,
{
    let candidates: Vec<&'static CategoryDifficultyEntry> = categories::entries_for_skill(skill)
        .into_iter()
        .filter(|e| explicit_category.map_or(true, |c| e.category == c))
        .collect();

    if candidates.is_empty() {
        return Err(LernError::UnknownSkillOrSpell(skill.to_string()));
    }

    let mut best: Option<(u64, &'static CategoryDifficultyEntry)> = None;
    for entry in candidates {
        if let Some(cost) = eval(entry) {
            if best.map_or(true, |(b, _)| cost < b) {
                best = Some((cost, entry));
            }
        }
    }

    match best {
        Some((_, entry)) => Ok(entry),
        None => Err(LernError::NoRuleForLevel {
            skill: skill.to_string(),
            from: current,
            to: target,
        }),
    }
}

/// Score a row for learning from scratch: class rate × base LE × 3
pub fn learn_score(
    class: CharClass,
) -> impl Fn(&'static CategoryDifficultyEntry) -> Option<u64> {
    move |entry| {
        let rate = skill_rates::ep_per_training_unit(class, entry.category) as u64;
        Some(rate * entry.base_learn_le as u64 * 3)
    }
}

/// Score a row for improving to `target`: class rate × TE for that level.
/// Rows whose sparse table skips the level are excluded.
pub fn improve_score(
    class: CharClass,
    target: Level,
) -> impl Fn(&'static CategoryDifficultyEntry) -> Option<u64> {
    move |entry| {
        let te = entry.training_units_for(target)?;
        let rate = skill_rates::ep_per_training_unit(class, entry.category) as u64;
        Some(rate * te as u64)
    }
}

/// One candidate row as seen by a given class, for introspection
#[derive(Debug, Clone, Copy)]
pub struct CategoryOption {
    pub category: Category,
    pub difficulty: crate::core::types::Difficulty,
    pub base_learn_le: u32,
    pub ep_per_te: u32,
}

/// Every row that files `skill`, with the class's rate attached. Empty when
/// the skill is unknown to the tables.
pub fn category_options(skill: &str, class: CharClass) -> Vec<CategoryOption> {
    categories::entries_for_skill(skill)
        .into_iter()
        .map(|e| CategoryOption {
            category: e.category,
            difficulty: e.difficulty,
            base_learn_le: e.base_learn_le,
            ep_per_te: skill_rates::ep_per_training_unit(class, e.category),
        })
        .collect()
}
