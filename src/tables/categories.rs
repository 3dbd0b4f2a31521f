//! The category/difficulty table: base learn cost, member skills, and the
//! sparse level→TE improvement costs
//!
//! This is the authoritative filing of skills. A skill may appear in several
//! rows (Klettern is filed under Alltag, Halbwelt and Körper); the resolver
//! searches all of them and picks the cheapest for the acting class.
//!
//! The improvement maps are sparse by design: weapon rows start at level 6,
//! most general rows at level 9. A missing target level means the rulebook
//! defines no cost for that transition.

use crate::core::types::{Category, Difficulty, Level};

/// One row of the learning-cost table
#[derive(Debug)]
pub struct CategoryDifficultyEntry {
    pub category: Category,
    pub difficulty: Difficulty,
    /// LE needed to learn a member skill from scratch
    pub base_learn_le: u32,
    /// Skills the rulebook files under this row
    pub member_skills: &'static [&'static str],
    /// Sparse map: target level → TE required to improve to it
    pub training_units: &'static [(Level, u32)],
}

impl CategoryDifficultyEntry {
    /// TE required to reach `target_level`, if the row tabulates it
    pub fn training_units_for(&self, target_level: Level) -> Option<u32> {
        self.training_units
            .iter()
            .find(|(level, _)| *level == target_level)
            .map(|(_, te)| *te)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.member_skills.iter().any(|s| *s == skill)
    }
}

pub static CATEGORY_TABLE: &[CategoryDifficultyEntry] = &[
    // === Alltag ===
    CategoryDifficultyEntry {
        category: Category::Alltag,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &[
            "Klettern",
            "Reiten",
            "Seilkunst",
            "Bootfahren",
            "Glücksspiel",
            "Wagenlenken",
            "Musizieren",
        ],
        training_units: &[
            (9, 0),
            (10, 0),
            (11, 0),
            (12, 0),
            (13, 1),
            (14, 2),
            (15, 5),
            (16, 10),
            (17, 10),
            (18, 20),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Alltag,
        difficulty: Difficulty::Normal,
        base_learn_le: 1,
        member_skills: &["Schreiben", "Sprache"],
        training_units: &[
            (9, 1),
            (10, 1),
            (11, 1),
            (12, 1),
            (13, 2),
            (14, 2),
            (15, 5),
            (16, 10),
            (17, 10),
            (18, 20),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Alltag,
        difficulty: Difficulty::Schwer,
        base_learn_le: 2,
        member_skills: &["Erste Hilfe", "Etikette"],
        training_units: &[
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 5),
            (13, 10),
            (14, 10),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Alltag,
        difficulty: Difficulty::SehrSchwer,
        base_learn_le: 10,
        member_skills: &["Gerätekunde", "Geschäftssinn"],
        training_units: &[
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 10),
            (13, 20),
            (14, 20),
            (15, 50),
            (16, 50),
            (17, 100),
            (18, 100),
        ],
    },
    // === Freiland ===
    CategoryDifficultyEntry {
        category: Category::Freiland,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &["Überleben"],
        training_units: &[
            (9, 1),
            (10, 1),
            (11, 1),
            (12, 2),
            (13, 2),
            (14, 2),
            (15, 5),
            (16, 5),
            (17, 10),
            (18, 10),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Freiland,
        difficulty: Difficulty::Normal,
        base_learn_le: 2,
        member_skills: &["Naturkunde", "Pflanzenkunde", "Tierkunde"],
        training_units: &[
            (9, 2),
            (10, 5),
            (11, 5),
            (12, 10),
            (13, 10),
            (14, 20),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Freiland,
        difficulty: Difficulty::Schwer,
        base_learn_le: 4,
        member_skills: &["Schleichen", "Spurensuche", "Tarnen"],
        training_units: &[
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 10),
            (13, 20),
            (14, 20),
            (15, 50),
            (16, 50),
            (17, 100),
            (18, 100),
        ],
    },
    // === Halbwelt ===
    CategoryDifficultyEntry {
        category: Category::Halbwelt,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &["Klettern", "Glücksspiel", "Balancieren"],
        training_units: &[
            (9, 0),
            (10, 0),
            (11, 0),
            (12, 0),
            (13, 1),
            (14, 2),
            (15, 5),
            (16, 10),
            (17, 10),
            (18, 20),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Halbwelt,
        difficulty: Difficulty::Normal,
        base_learn_le: 2,
        member_skills: &["Akrobatik"],
        training_units: &[
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 5),
            (13, 10),
            (14, 10),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Halbwelt,
        difficulty: Difficulty::Schwer,
        base_learn_le: 2,
        member_skills: &["Gassenwissen", "Stehlen"],
        training_units: &[
            (9, 2),
            (10, 5),
            (11, 5),
            (12, 10),
            (13, 10),
            (14, 20),
            (15, 20),
            (16, 50),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Halbwelt,
        difficulty: Difficulty::SehrSchwer,
        base_learn_le: 10,
        member_skills: &["Betäuben"],
        training_units: &[
            (9, 5),
            (10, 10),
            (11, 20),
            (12, 20),
            (13, 30),
            (14, 50),
            (15, 80),
            (16, 80),
            (17, 100),
            (18, 100),
        ],
    },
    // === Kampf (starts at level 6) ===
    CategoryDifficultyEntry {
        category: Category::Kampf,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &["Reiten"],
        training_units: &[
            (6, 0),
            (7, 0),
            (8, 0),
            (9, 0),
            (10, 0),
            (11, 0),
            (12, 0),
            (13, 1),
            (14, 2),
            (15, 5),
            (16, 10),
            (17, 10),
            (18, 20),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Kampf,
        difficulty: Difficulty::Normal,
        base_learn_le: 2,
        member_skills: &["Anführen", "Athletik"],
        training_units: &[
            (6, 0),
            (7, 0),
            (8, 0),
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 5),
            (13, 10),
            (14, 10),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Kampf,
        difficulty: Difficulty::Schwer,
        base_learn_le: 10,
        member_skills: &["Betäuben"],
        training_units: &[
            (6, 0),
            (7, 0),
            (8, 0),
            (9, 5),
            (10, 10),
            (11, 20),
            (12, 20),
            (13, 30),
            (14, 50),
            (15, 80),
            (16, 80),
            (17, 100),
            (18, 100),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Kampf,
        difficulty: Difficulty::SehrSchwer,
        base_learn_le: 10,
        member_skills: &[],
        training_units: &[
            (6, 2),
            (7, 5),
            (8, 10),
            (9, 10),
            (10, 20),
            (11, 20),
            (12, 30),
            (13, 50),
            (14, 50),
            (15, 100),
            (16, 100),
            (17, 150),
            (18, 200),
        ],
    },
    // === Körper ===
    CategoryDifficultyEntry {
        category: Category::Koerper,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &["Geländelauf", "Klettern", "Schwimmen", "Balancieren"],
        training_units: &[
            (9, 0),
            (10, 0),
            (11, 0),
            (12, 0),
            (13, 1),
            (14, 2),
            (15, 5),
            (16, 10),
            (17, 10),
            (18, 20),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Koerper,
        difficulty: Difficulty::Normal,
        base_learn_le: 1,
        member_skills: &["Tauchen"],
        training_units: &[
            (9, 1),
            (10, 1),
            (11, 2),
            (12, 2),
            (13, 5),
            (14, 10),
            (15, 10),
            (16, 20),
            (17, 20),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Koerper,
        difficulty: Difficulty::Schwer,
        base_learn_le: 2,
        member_skills: &["Akrobatik", "Athletik", "Laufen", "Meditieren"],
        training_units: &[
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 5),
            (13, 10),
            (14, 10),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    // === Sozial ===
    CategoryDifficultyEntry {
        category: Category::Sozial,
        difficulty: Difficulty::Leicht,
        base_learn_le: 1,
        member_skills: &["Anführen", "Verführen", "Verstellen", "Etikette"],
        training_units: &[
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 5),
            (13, 10),
            (14, 10),
            (15, 20),
            (16, 20),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Sozial,
        difficulty: Difficulty::Normal,
        base_learn_le: 2,
        member_skills: &["Gassenwissen", "Beredsamkeit", "Verhören"],
        training_units: &[
            (9, 2),
            (10, 5),
            (11, 5),
            (12, 10),
            (13, 10),
            (14, 20),
            (15, 20),
            (16, 50),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Sozial,
        difficulty: Difficulty::Schwer,
        base_learn_le: 4,
        member_skills: &["Menschenkenntnis"],
        training_units: &[
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 10),
            (13, 20),
            (14, 20),
            (15, 50),
            (16, 50),
            (17, 100),
            (18, 100),
        ],
    },
    // === Unterwelt ===
    CategoryDifficultyEntry {
        category: Category::Unterwelt,
        difficulty: Difficulty::Leicht,
        base_learn_le: 2,
        member_skills: &["Gassenwissen", "Stehlen"],
        training_units: &[
            (9, 2),
            (10, 5),
            (11, 5),
            (12, 10),
            (13, 10),
            (14, 20),
            (15, 20),
            (16, 50),
            (17, 50),
            (18, 50),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Unterwelt,
        difficulty: Difficulty::Normal,
        base_learn_le: 4,
        member_skills: &[
            "Schleichen",
            "Spurensuche",
            "Tarnen",
            "Fallen entdecken",
            "Schlösser öffnen",
        ],
        training_units: &[
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 10),
            (13, 20),
            (14, 20),
            (15, 50),
            (16, 50),
            (17, 100),
            (18, 100),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Unterwelt,
        difficulty: Difficulty::Schwer,
        base_learn_le: 10,
        member_skills: &["Fallenmechanik", "Meucheln", "Menschenkenntnis"],
        training_units: &[
            (9, 5),
            (10, 10),
            (11, 20),
            (12, 20),
            (13, 30),
            (14, 50),
            (15, 80),
            (16, 80),
            (17, 100),
            (18, 100),
        ],
    },
    // === Waffen (start at level 6) ===
    CategoryDifficultyEntry {
        category: Category::Waffen,
        difficulty: Difficulty::Leicht,
        base_learn_le: 2,
        member_skills: &["Stichwaffen"],
        training_units: &[
            (6, 1),
            (7, 1),
            (8, 1),
            (9, 2),
            (10, 2),
            (11, 5),
            (12, 10),
            (13, 20),
            (14, 50),
            (15, 100),
            (16, 100),
            (17, 150),
            (18, 150),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Waffen,
        difficulty: Difficulty::Normal,
        base_learn_le: 4,
        member_skills: &["Einhandschlagwaffen"],
        training_units: &[
            (6, 1),
            (7, 1),
            (8, 2),
            (9, 2),
            (10, 5),
            (11, 10),
            (12, 20),
            (13, 50),
            (14, 50),
            (15, 100),
            (16, 150),
            (17, 150),
            (18, 200),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Waffen,
        difficulty: Difficulty::Schwer,
        base_learn_le: 6,
        member_skills: &["Zweihandschlagwaffen"],
        training_units: &[
            (6, 1),
            (7, 2),
            (8, 2),
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 20),
            (13, 50),
            (14, 100),
            (15, 150),
            (16, 200),
            (17, 300),
            (18, 300),
        ],
    },
    CategoryDifficultyEntry {
        category: Category::Waffen,
        difficulty: Difficulty::SehrSchwer,
        base_learn_le: 8,
        member_skills: &["Kettenwaffen"],
        training_units: &[
            (6, 1),
            (7, 2),
            (8, 2),
            (9, 5),
            (10, 10),
            (11, 20),
            (12, 50),
            (13, 100),
            (14, 150),
            (15, 200),
            (16, 300),
            (17, 300),
            (18, 400),
        ],
    },
    // === Schilde und Parierwaffen (own level range 2..8) ===
    CategoryDifficultyEntry {
        category: Category::SchildParier,
        difficulty: Difficulty::Normal,
        base_learn_le: 2,
        member_skills: &["Kleiner Schild", "Großer Schild", "Parierwaffe"],
        training_units: &[
            (2, 1),
            (3, 2),
            (4, 10),
            (5, 30),
            (6, 50),
            (7, 100),
            (8, 150),
        ],
    },
];

/// Look up a single row
pub fn entry(
    category: Category,
    difficulty: Difficulty,
) -> Option<&'static CategoryDifficultyEntry> {
    CATEGORY_TABLE
        .iter()
        .find(|e| e.category == category && e.difficulty == difficulty)
}

/// Every row that files the given skill, in table order
pub fn entries_for_skill(skill: &str) -> Vec<&'static CategoryDifficultyEntry> {
    CATEGORY_TABLE.iter().filter(|e| e.contains(skill)).collect()
}
