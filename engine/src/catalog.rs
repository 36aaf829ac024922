//! Exercise catalog reference types
//!
//! The catalog is immutable reference data owned by the exercise library:
//! every exercise the dashboard knows about, keyed by identifier, with the
//! attributes the quality analyzers need (movement pattern, muscles worked,
//! difficulty, category, equipment).
//!
//! # Design Principles
//!
//! 1. **Closed Vocabularies**: Patterns, muscles, and categories are enums,
//!    not strings; unmapped values fail at the serde boundary, not deep in
//!    scoring code.
//! 2. **Caller-Owned Data**: The engine never fetches the catalog; it is
//!    passed in and looked up by id only.
//! 3. **Partial Catalogs Tolerated**: A plan may reference exercises that
//!    are not loaded yet; lookups that miss are skipped, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Movement Patterns
// ============================================================================

/// Fundamental movement category of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    Squat,
    Hinge,
    PushHorizontal,
    PushVertical,
    PullHorizontal,
    PullVertical,
    Core,
    Rotation,
    Carry,
    WarmUp,
    Stretch,
    Mobility,
}

impl MovementPattern {
    /// The six patterns every balanced program is expected to cover
    pub const FUNDAMENTAL: [MovementPattern; 6] = [
        MovementPattern::Squat,
        MovementPattern::Hinge,
        MovementPattern::PushHorizontal,
        MovementPattern::PushVertical,
        MovementPattern::PullHorizontal,
        MovementPattern::PullVertical,
    ];

    /// Patterns that round a program out but are not mandatory
    pub const COMPLEMENTARY: [MovementPattern; 3] = [
        MovementPattern::Core,
        MovementPattern::Rotation,
        MovementPattern::Carry,
    ];

    /// Whether this pattern counts toward pushing volume
    pub fn is_push(&self) -> bool {
        matches!(
            self,
            MovementPattern::PushHorizontal | MovementPattern::PushVertical
        )
    }

    /// Whether this pattern counts toward pulling volume
    pub fn is_pull(&self) -> bool {
        matches!(
            self,
            MovementPattern::PullHorizontal | MovementPattern::PullVertical
        )
    }

    /// Whether this pattern loads the upper body
    pub fn is_upper_body(&self) -> bool {
        self.is_push() || self.is_pull()
    }

    /// Whether this pattern loads the lower body
    pub fn is_lower_body(&self) -> bool {
        matches!(self, MovementPattern::Squat | MovementPattern::Hinge)
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hip hinge",
            MovementPattern::PushHorizontal => "Horizontal push",
            MovementPattern::PushVertical => "Vertical push",
            MovementPattern::PullHorizontal => "Horizontal pull",
            MovementPattern::PullVertical => "Vertical pull",
            MovementPattern::Core => "Core",
            MovementPattern::Rotation => "Rotation",
            MovementPattern::Carry => "Loaded carry",
            MovementPattern::WarmUp => "Warm-up",
            MovementPattern::Stretch => "Stretch",
            MovementPattern::Mobility => "Mobility",
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Muscle Groups
// ============================================================================

/// Muscle group worked by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Quadriceps,
    Glutes,
    Hamstrings,
    Calves,
    Chest,
    Back,
    Lats,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    LowerBack,
}

impl MuscleGroup {
    /// The major groups the balance and volume analyzers track individually
    pub const MAJOR: [MuscleGroup; 7] = [
        MuscleGroup::Quadriceps,
        MuscleGroup::Glutes,
        MuscleGroup::Hamstrings,
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Lats,
        MuscleGroup::Shoulders,
    ];

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MuscleGroup::Quadriceps => "Quadriceps",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Upper back",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::LowerBack => "Lower back",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// Difficulty and Equipment
// ============================================================================

/// Technical difficulty of an individual exercise
///
/// Distinct from [`crate::plan::PlanLevel`]: this grades one movement, the
/// plan level grades the athlete the program is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseDifficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExerciseDifficulty {
    /// Numeric index used for difficulty-gap arithmetic
    pub fn index(&self) -> u8 {
        match self {
            ExerciseDifficulty::Beginner => 0,
            ExerciseDifficulty::Intermediate => 1,
            ExerciseDifficulty::Advanced => 2,
        }
    }
}

/// Equipment an exercise is performed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    Machine,
    Cable,
    #[default]
    Bodyweight,
    Band,
    MedicineBall,
    Other,
}

// ============================================================================
// Categories and Workout Sections
// ============================================================================

/// Catalog category of an exercise; determines which workout phase it
/// belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    WarmUp,
    Mobility,
    Activation,
    Strength,
    Hypertrophy,
    Conditioning,
    CoreWork,
    Stretching,
    CoolDown,
}

/// Phase of a workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutSection {
    Warmup,
    Main,
    Cooldown,
}

/// Classify a catalog category into a workout phase
///
/// Preparation categories open the session, stretch categories close it,
/// everything else is principal work. Only principal exercises count toward
/// muscle-balance, volume, and rep-alignment scoring.
pub fn section_for_category(category: ExerciseCategory) -> WorkoutSection {
    match category {
        ExerciseCategory::WarmUp | ExerciseCategory::Mobility | ExerciseCategory::Activation => {
            WorkoutSection::Warmup
        }
        ExerciseCategory::Stretching | ExerciseCategory::CoolDown => WorkoutSection::Cooldown,
        ExerciseCategory::Strength
        | ExerciseCategory::Hypertrophy
        | ExerciseCategory::Conditioning
        | ExerciseCategory::CoreWork => WorkoutSection::Main,
    }
}

// ============================================================================
// Catalog Entries
// ============================================================================

/// One exercise as known to the exercise library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCatalogEntry {
    /// Stable identifier the plan references
    pub id: String,
    /// Display name
    pub name: String,
    /// Movement pattern
    pub pattern: MovementPattern,
    /// Catalog category (drives section classification)
    pub category: ExerciseCategory,
    /// Technical difficulty
    #[serde(default)]
    pub difficulty: ExerciseDifficulty,
    /// Equipment used
    #[serde(default)]
    pub equipment: Equipment,
    /// Muscles the exercise primarily trains
    pub primary_muscles: Vec<MuscleGroup>,
    /// Muscles trained as assistance
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    /// Suggested rep range, if the library defines one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_range_hint: Option<(u32, u32)>,
}

impl ExerciseCatalogEntry {
    /// Which workout phase this exercise belongs to
    pub fn section(&self) -> WorkoutSection {
        section_for_category(self.category)
    }

    /// Whether this exercise counts toward principal-work analysis
    pub fn is_principal(&self) -> bool {
        self.section() == WorkoutSection::Main
    }
}

/// Exercise catalog, keyed by exercise identifier
///
/// The catalog may be partial: plans can reference exercises that are not
/// loaded yet. Analyzers skip unknown identifiers instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseCatalog(HashMap<String, ExerciseCatalogEntry>);

impl ExerciseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by exercise identifier
    pub fn get(&self, exercise_id: &str) -> Option<&ExerciseCatalogEntry> {
        self.0.get(exercise_id)
    }

    /// Insert an entry, keyed by its own id
    pub fn insert(&mut self, entry: ExerciseCatalogEntry) {
        self.0.insert(entry.id.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ExerciseCatalogEntry> for ExerciseCatalog {
    fn from_iter<I: IntoIterator<Item = ExerciseCatalogEntry>>(iter: I) -> Self {
        let mut catalog = ExerciseCatalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
