//! Movement pattern coverage analyzer
//!
//! A complete week of training touches all six fundamental patterns (squat,
//! hinge, horizontal/vertical push and pull). The complementary patterns
//! (core, rotation, carry) round the program out at a smaller penalty.

use std::collections::HashSet;

use crate::catalog::{ExerciseCatalog, MovementPattern};
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

const MISSING_FUNDAMENTAL_PENALTY: f64 = 15.0;
const MISSING_COMPLEMENTARY_PENALTY: f64 = 5.0;

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let covered: HashSet<MovementPattern> = super::principal_exercises(plan, catalog)
        .into_iter()
        .map(|(_, _, entry)| entry.pattern)
        .collect();

    let mut points = 100.0;
    let mut issues = Vec::new();

    for pattern in MovementPattern::FUNDAMENTAL {
        if !covered.contains(&pattern) {
            points -= MISSING_FUNDAMENTAL_PENALTY;
            issues.push(QualityIssue::warning(
                format!("Missing fundamental pattern: {}", pattern.description()),
                format!("Add at least one {} exercise", pattern.description().to_lowercase()),
            ));
        }
    }

    for pattern in MovementPattern::COMPLEMENTARY {
        if !covered.contains(&pattern) {
            points -= MISSING_COMPLEMENTARY_PENALTY;
            issues.push(QualityIssue::info(
                format!("No {} work programmed", pattern.description().to_lowercase()),
                format!("Consider adding a {} exercise", pattern.description().to_lowercase()),
            ));
        }
    }

    QualityDimension::new(DimensionKey::PatternCoverage, clamp_score(points), issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Equipment, ExerciseCatalogEntry, ExerciseCategory, ExerciseDifficulty, MuscleGroup,
    };
    use crate::plan::{ExerciseAssignment, PlanLevel, TrainingGoal, WorkoutSession};
    use crate::report::Severity;

    fn entry(id: &str, pattern: MovementPattern, category: ExerciseCategory) -> ExerciseCatalogEntry {
        ExerciseCatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            pattern,
            category,
            difficulty: ExerciseDifficulty::Intermediate,
            equipment: Equipment::Barbell,
            primary_muscles: vec![MuscleGroup::Back],
            secondary_muscles: vec![],
            rep_range_hint: None,
        }
    }

    fn plan_of(ids: &[&str]) -> WorkoutPlan {
        WorkoutPlan {
            sessions: vec![WorkoutSession {
                name: None,
                exercises: ids
                    .iter()
                    .map(|id| ExerciseAssignment {
                        exercise_id: id.to_string(),
                        sets: 3,
                        reps: "10".to_string(),
                    })
                    .collect(),
            }],
            goal: TrainingGoal::General,
            level: PlanLevel::Intermediate,
            sessions_per_week: 1,
        }
    }

    fn full_catalog() -> ExerciseCatalog {
        vec![
            entry("squat", MovementPattern::Squat, ExerciseCategory::Strength),
            entry("hinge", MovementPattern::Hinge, ExerciseCategory::Strength),
            entry("push-h", MovementPattern::PushHorizontal, ExerciseCategory::Strength),
            entry("push-v", MovementPattern::PushVertical, ExerciseCategory::Strength),
            entry("pull-h", MovementPattern::PullHorizontal, ExerciseCategory::Strength),
            entry("pull-v", MovementPattern::PullVertical, ExerciseCategory::Strength),
            entry("plank", MovementPattern::Core, ExerciseCategory::CoreWork),
            entry("woodchop", MovementPattern::Rotation, ExerciseCategory::CoreWork),
            entry("farmer-carry", MovementPattern::Carry, ExerciseCategory::Conditioning),
            entry("leg-swings", MovementPattern::Mobility, ExerciseCategory::Mobility),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_full_coverage_is_perfect() {
        let dim = analyze(
            &plan_of(&[
                "squat", "hinge", "push-h", "push-v", "pull-h", "pull-v", "plank", "woodchop",
                "farmer-carry",
            ]),
            &full_catalog(),
        );
        assert_eq!(dim.score, 100);
        assert!(dim.issues.is_empty());
    }

    #[test]
    fn test_each_missing_fundamental_costs_fifteen() {
        let dim = analyze(
            &plan_of(&["squat", "push-h", "push-v", "pull-h", "pull-v", "plank", "woodchop", "farmer-carry"]),
            &full_catalog(),
        );
        assert_eq!(dim.score, 85);
        assert_eq!(dim.issues.len(), 1);
        assert_eq!(dim.issues[0].severity, Severity::Warning);
        assert!(dim.issues[0].message.contains("Hip hinge"));
    }

    #[test]
    fn test_missing_complementary_costs_five() {
        let dim = analyze(
            &plan_of(&["squat", "hinge", "push-h", "push-v", "pull-h", "pull-v"]),
            &full_catalog(),
        );
        assert_eq!(dim.score, 85);
        assert!(dim.issues.iter().all(|i| i.severity == Severity::Info));
        assert_eq!(dim.issues.len(), 3);
    }

    #[test]
    fn test_warmup_exercises_do_not_count_as_coverage() {
        // Mobility entry is warm-up phase, so nothing covers any pattern
        let dim = analyze(&plan_of(&["leg-swings"]), &full_catalog());
        assert_eq!(dim.score, 0);
        assert_eq!(dim.issues.len(), 9);
    }

    #[test]
    fn test_empty_plan_floors_at_zero() {
        let dim = analyze(&plan_of(&[]), &full_catalog());
        // 6 * 15 + 3 * 5 = 105 raw penalty, clamped
        assert_eq!(dim.score, 0);
        assert_eq!(dim.issues.len(), 9);
    }
}
