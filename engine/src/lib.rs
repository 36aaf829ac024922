//! Workout Quality Engine
//!
//! Deterministic, multi-dimension quality scoring for one week of programmed
//! training. Given a plan and the exercise catalog it references, the engine
//! grades muscular balance, movement-pattern coverage, weekly volume,
//! rep-range alignment, exercise variety, difficulty coherence, and session
//! balance, and combines them into a weighted overall score with structured,
//! actionable issues.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: No I/O, no clock, no shared state; identical
//!    inputs always produce identical reports.
//! 2. **Closed Vocabularies**: Patterns, goals, and levels are enums with
//!    exhaustive scoring tables, not string-keyed lookups.
//! 3. **Graceful Degradation**: Partial catalogs and free-text rep specs
//!    reduce the data analyzed, never fail the analysis.

pub mod analysis;
pub mod catalog;
pub mod errors;
pub mod plan;
pub mod report;
pub mod validation;

// Re-export commonly used items
pub use analysis::analyze_workout_quality;
pub use catalog::{
    section_for_category, Equipment, ExerciseCatalog, ExerciseCatalogEntry, ExerciseCategory,
    ExerciseDifficulty, MovementPattern, MuscleGroup, WorkoutSection,
};
pub use errors::PlanError;
pub use plan::{
    ExerciseAssignment, PlanLevel, RepRange, TrainingGoal, WorkoutPlan, WorkoutSession,
};
pub use report::{
    DimensionKey, QualityDimension, QualityIssue, QualityLevel, QualityReport, Severity,
};
