//! Workout quality analysis
//!
//! Seven independent dimension analyzers plus the aggregator that combines
//! them into one [`QualityReport`]. Everything here is pure: identical
//! inputs always produce identical output, there is no I/O, no clock, no
//! shared state.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: Each analyzer is a referentially-transparent
//!    function of the plan and the catalog.
//! 2. **Graceful Degradation**: Exercises missing from the catalog are
//!    skipped, never an error; the report is always complete.
//! 3. **Fixed Issue Order**: Issues are emitted in plan and table order,
//!    never in hash-map iteration order, so repeated runs are byte-identical.

mod difficulty;
mod muscle_balance;
mod pattern_coverage;
mod rep_alignment;
mod session_balance;
mod variety;
mod weekly_volume;

use crate::catalog::{ExerciseCatalog, ExerciseCatalogEntry};
use crate::plan::{ExerciseAssignment, WorkoutPlan};
use crate::report::{
    clamp_score, DimensionKey, QualityDimension, QualityLevel, QualityReport, STRENGTH_THRESHOLD,
};

/// Analyze a workout plan across all seven quality dimensions
///
/// Runs the dimension analyzers in declaration order, combines their scores
/// with the fixed weight table, and extracts the strengths (dimensions at or
/// above the strength threshold).
pub fn analyze_workout_quality(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityReport {
    let dimensions: Vec<QualityDimension> = DimensionKey::ALL
        .iter()
        .map(|key| match key {
            DimensionKey::MuscleBalance => muscle_balance::analyze(plan, catalog),
            DimensionKey::PatternCoverage => pattern_coverage::analyze(plan, catalog),
            DimensionKey::WeeklyVolume => weekly_volume::analyze(plan, catalog),
            DimensionKey::RepAlignment => rep_alignment::analyze(plan, catalog),
            DimensionKey::Variety => variety::analyze(plan, catalog),
            DimensionKey::Difficulty => difficulty::analyze(plan, catalog),
            DimensionKey::SessionBalance => session_balance::analyze(plan, catalog),
        })
        .collect();

    let weighted: f64 = dimensions
        .iter()
        .map(|d| f64::from(d.score) * d.key.weight())
        .sum();
    let score = clamp_score(weighted);

    let strengths = dimensions
        .iter()
        .filter(|d| d.score >= STRENGTH_THRESHOLD)
        .map(|d| d.label.clone())
        .collect();

    QualityReport {
        score,
        level: QualityLevel::from_score(score),
        dimensions,
        strengths,
    }
}

/// All assignments with a known catalog entry, in plan order
///
/// Assignments referencing ids absent from the catalog are dropped here,
/// which excludes them from every dimension.
fn known_exercises<'a>(
    plan: &'a WorkoutPlan,
    catalog: &'a ExerciseCatalog,
) -> Vec<(usize, &'a ExerciseAssignment, &'a ExerciseCatalogEntry)> {
    plan.sessions
        .iter()
        .enumerate()
        .flat_map(|(session_idx, session)| {
            session
                .exercises
                .iter()
                .filter_map(move |assignment| {
                    catalog
                        .get(&assignment.exercise_id)
                        .map(|entry| (session_idx, assignment, entry))
                })
        })
        .collect()
}

/// Principal (main-phase) assignments with a known catalog entry
///
/// Warm-up and cool-down entries do not count toward balance, volume, or
/// rep-alignment scoring.
fn principal_exercises<'a>(
    plan: &'a WorkoutPlan,
    catalog: &'a ExerciseCatalog,
) -> Vec<(usize, &'a ExerciseAssignment, &'a ExerciseCatalogEntry)> {
    known_exercises(plan, catalog)
        .into_iter()
        .filter(|(_, _, entry)| entry.is_principal())
        .collect()
}
