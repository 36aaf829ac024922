//! Exercise variety analyzer
//!
//! Considers every exercise in the plan, warm-up and cool-down included.
//! Scores the ratio of distinct exercises to total slots, flags exercises
//! repeated across three or more sessions, and nudges toward equipment
//! diversity on larger plans.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Equipment, ExerciseCatalog};
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

/// Sessions an exercise may appear in before it counts as over-repeated
const REPEAT_SESSION_LIMIT: usize = 3;
/// Assignment count from which equipment diversity is expected
const EQUIPMENT_CHECK_MIN_EXERCISES: usize = 6;
/// Distinct equipment types expected on larger plans
const EQUIPMENT_DIVERSITY_MIN: usize = 3;

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let known = super::known_exercises(plan, catalog);
    let total = known.len();

    if total == 0 {
        return QualityDimension::new(
            DimensionKey::Variety,
            0,
            vec![QualityIssue::critical(
                "The plan contains no exercises",
                "Add exercises to the plan before assigning it",
            )],
        );
    }

    let unique: HashSet<&str> = known.iter().map(|(_, a, _)| a.exercise_id.as_str()).collect();
    let unique_ratio = unique.len() as f64 / total as f64;

    let mut sessions_by_exercise: HashMap<&str, HashSet<usize>> = HashMap::new();
    for (session_idx, assignment, _) in &known {
        sessions_by_exercise
            .entry(assignment.exercise_id.as_str())
            .or_default()
            .insert(*session_idx);
    }

    let mut issues = Vec::new();
    let mut over_repeated = 0u32;
    // First-appearance order keeps the report deterministic
    let mut flagged: HashSet<&str> = HashSet::new();
    for (_, assignment, entry) in &known {
        let id = assignment.exercise_id.as_str();
        if flagged.contains(id) {
            continue;
        }
        let session_count = sessions_by_exercise[id].len();
        if session_count >= REPEAT_SESSION_LIMIT {
            flagged.insert(id);
            over_repeated += 1;
            issues.push(QualityIssue::warning(
                format!("{} is repeated in {} sessions", entry.name, session_count),
                format!("Substitute a variant of {} in some sessions", entry.name),
            ));
        }
    }

    let equipment: HashSet<Equipment> = known.iter().map(|(_, _, e)| e.equipment).collect();
    let low_equipment_diversity =
        total >= EQUIPMENT_CHECK_MIN_EXERCISES && equipment.len() < EQUIPMENT_DIVERSITY_MIN;
    if low_equipment_diversity {
        issues.push(QualityIssue::info(
            format!("Only {} equipment type(s) in use", equipment.len()),
            "Mix in other equipment to vary the training stimulus",
        ));
    }

    let mut points = unique_ratio * 100.0;
    points -= 10.0 * f64::from(over_repeated);
    if low_equipment_diversity {
        points -= 10.0;
    }

    QualityDimension::new(DimensionKey::Variety, clamp_score(points), issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        ExerciseCatalogEntry, ExerciseCategory, ExerciseDifficulty, MovementPattern, MuscleGroup,
    };
    use crate::plan::{ExerciseAssignment, PlanLevel, TrainingGoal, WorkoutSession};
    use crate::report::Severity;

    fn entry(id: &str, equipment: Equipment) -> ExerciseCatalogEntry {
        ExerciseCatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            pattern: MovementPattern::PushHorizontal,
            category: ExerciseCategory::Strength,
            difficulty: ExerciseDifficulty::Intermediate,
            equipment,
            primary_muscles: vec![MuscleGroup::Chest],
            secondary_muscles: vec![],
            rep_range_hint: None,
        }
    }

    fn plan_of(sessions: &[&[&str]]) -> WorkoutPlan {
        WorkoutPlan {
            sessions: sessions
                .iter()
                .map(|ids| WorkoutSession {
                    name: None,
                    exercises: ids
                        .iter()
                        .map(|id| ExerciseAssignment {
                            exercise_id: id.to_string(),
                            sets: 3,
                            reps: "10".to_string(),
                        })
                        .collect(),
                })
                .collect(),
            goal: TrainingGoal::General,
            level: PlanLevel::Intermediate,
            sessions_per_week: sessions.len().max(1) as u32,
        }
    }

    #[test]
    fn test_empty_plan_is_critical_zero() {
        let dim = analyze(&plan_of(&[&[]]), &ExerciseCatalog::new());
        assert_eq!(dim.score, 0);
        assert_eq!(dim.issues.len(), 1);
        assert_eq!(dim.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_all_unique_exercises_score_full() {
        let catalog: ExerciseCatalog = vec![
            entry("a", Equipment::Barbell),
            entry("b", Equipment::Dumbbell),
            entry("c", Equipment::Cable),
        ]
        .into_iter()
        .collect();
        let dim = analyze(&plan_of(&[&["a", "b", "c"]]), &catalog);
        assert_eq!(dim.score, 100);
        assert!(dim.issues.is_empty());
    }

    #[test]
    fn test_cross_session_repetition_warns() {
        let catalog: ExerciseCatalog = vec![
            entry("bench-press", Equipment::Barbell),
            entry("row", Equipment::Dumbbell),
            entry("squat", Equipment::Kettlebell),
        ]
        .into_iter()
        .collect();
        let dim = analyze(
            &plan_of(&[
                &["bench-press", "row"],
                &["bench-press", "squat"],
                &["bench-press", "row"],
            ]),
            &catalog,
        );
        // bench-press appears in 3 sessions
        let warning = dim
            .issues
            .iter()
            .find(|i| i.severity == Severity::Warning)
            .expect("repetition warning");
        assert!(warning.message.contains("bench-press"));
        assert!(warning.message.contains('3'));
        // unique ratio 3/6 -> 50, minus 10 for the repeated lift
        assert_eq!(dim.score, 40);
    }

    #[test]
    fn test_repeating_within_one_session_is_not_flagged() {
        let catalog: ExerciseCatalog = vec![entry("a", Equipment::Barbell)].into_iter().collect();
        let dim = analyze(&plan_of(&[&["a", "a", "a"]]), &catalog);
        assert!(!dim.issues.iter().any(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_equipment_diversity_not_checked_on_small_plans() {
        let catalog: ExerciseCatalog = vec![
            entry("a", Equipment::Bodyweight),
            entry("b", Equipment::Bodyweight),
        ]
        .into_iter()
        .collect();
        let dim = analyze(&plan_of(&[&["a", "b"]]), &catalog);
        assert!(dim.issues.is_empty());
    }

    #[test]
    fn test_low_equipment_diversity_on_large_plan() {
        let catalog: ExerciseCatalog = (0..6)
            .map(|i| entry(&format!("ex{i}"), Equipment::Machine))
            .collect();
        let dim = analyze(
            &plan_of(&[&["ex0", "ex1", "ex2"], &["ex3", "ex4", "ex5"]]),
            &catalog,
        );
        assert_eq!(dim.score, 90);
        assert_eq!(dim.issues.len(), 1);
        assert_eq!(dim.issues[0].severity, Severity::Info);
    }
}
