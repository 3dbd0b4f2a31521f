//! Skill and spell master data
//!
//! The cost engine needs one external fact per request: what the named
//! entry IS (a skill, possibly with a fixed filing, or a spell with school
//! and level). That lookup is behind the [`Catalog`] trait so the engine
//! does not care whether the data comes from the built-in rulebook set or a
//! campaign file.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::core::error::{LernError, Result};
use crate::core::types::{Category, Difficulty, SpellSchool};
use crate::tables::categories::CATEGORY_TABLE;

/// What the master data knows about one named entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryMetadata {
    Skill {
        name: String,
        /// Fixed filing, if the campaign pins one; `None` lets the
        /// resolver scan all rows
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    },
    Spell {
        name: String,
        school: SpellSchool,
        /// Spell level as stored upstream; validated at calculation time
        level: i32,
    },
}

impl EntryMetadata {
    pub fn name(&self) -> &str {
        match self {
            EntryMetadata::Skill { name, .. } => name,
            EntryMetadata::Spell { name, .. } => name,
        }
    }
}

/// Read-only master-data lookup
pub trait Catalog {
    fn lookup(&self, name: &str) -> Option<&EntryMetadata>;
}

/// In-memory catalog, optionally extended from campaign TOML files
#[derive(Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, EntryMetadata>,
}

/// Built-in spell list: name, school, level. A small working set of the
/// common rulebook spells; campaigns extend it via TOML.
static BUILTIN_SPELLS: &[(&str, SpellSchool, i32)] = &[
    ("Angst", SpellSchool::Beherrschen, 1),
    ("Schlaf", SpellSchool::Beherrschen, 1),
    ("Macht über die Sinne", SpellSchool::Beherrschen, 5),
    ("Heranholen", SpellSchool::Bewegen, 2),
    ("Fliegen", SpellSchool::Bewegen, 6),
    ("Erkennen von Zauberei", SpellSchool::Erkennen, 1),
    ("Hören der Geister", SpellSchool::Erkennen, 3),
    ("Feuerlanze", SpellSchool::Erschaffen, 4),
    ("Blitze schleudern", SpellSchool::Erschaffen, 5),
    ("Nebel weben", SpellSchool::Formen, 2),
    ("Unsichtbarkeit", SpellSchool::Veraendern, 4),
    ("Stärke", SpellSchool::Veraendern, 3),
    ("Bannen von Zauberwerk", SpellSchool::Zerstoeren, 6),
    ("Heilen von Wunden", SpellSchool::Wunder, 1),
    ("Segnen", SpellSchool::Wunder, 1),
    ("Austreibung des Bösen", SpellSchool::Wunder, 6),
    ("Erdfessel", SpellSchool::Dweomer, 2),
    ("Lied der Ruhe", SpellSchool::Lied, 2),
    ("Lied des Mutes", SpellSchool::Lied, 3),
];

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with every skill the category table files plus the
    /// built-in spell list.
    pub fn rulebook() -> Self {
        let mut catalog = Self::new();
        for row in CATEGORY_TABLE {
            for skill in row.member_skills {
                // filed skills resolve through the table scan, so no
                // pinned category here
                catalog.insert_skill(skill, None, None);
            }
        }
        for (name, school, level) in BUILTIN_SPELLS {
            catalog.insert_spell(name, *school, *level);
        }
        catalog
    }

    pub fn insert_skill(
        &mut self,
        name: &str,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) {
        self.entries.insert(
            name.to_string(),
            EntryMetadata::Skill {
                name: name.to_string(),
                category,
                difficulty,
            },
        );
    }

    pub fn insert_spell(&mut self, name: &str, school: SpellSchool, level: i32) {
        self.entries.insert(
            name.to_string(),
            EntryMetadata::Spell {
                name: name.to_string(),
                school,
                level,
            },
        );
    }

    /// Merge a campaign TOML document into the catalog. Later entries win
    /// over earlier ones, including the built-ins.
    pub fn extend_from_toml_str(&mut self, doc: &str) -> Result<()> {
        let file: CatalogFile =
            toml::from_str(doc).map_err(|e| LernError::InvalidCatalog(e.to_string()))?;
        for skill in file.skills {
            if self.entries.contains_key(&skill.name) {
                warn!(name = %skill.name, "catalog entry overridden");
            }
            let category = skill
                .category
                .as_deref()
                .map(|s| s.parse::<Category>())
                .transpose()?;
            let difficulty = skill
                .difficulty
                .as_deref()
                .map(|s| s.parse::<Difficulty>())
                .transpose()?;
            self.insert_skill(&skill.name, category, difficulty);
        }
        for spell in file.spells {
            let school: SpellSchool = spell.school.parse()?;
            self.insert_spell(&spell.name, school, spell.level);
        }
        Ok(())
    }

    pub fn extend_from_path(&mut self, path: &Path) -> Result<()> {
        let doc = std::fs::read_to_string(path)?;
        self.extend_from_toml_str(&doc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, name: &str) -> Option<&EntryMetadata> {
        self.entries.get(name)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    skills: Vec<SkillRow>,
    #[serde(default)]
    spells: Vec<SpellRow>,
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    name: String,
    category: Option<String>,
    difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpellRow {
    name: String,
    school: String,
    level: i32,
}
