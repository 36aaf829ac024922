//! Muscle balance analyzer
//!
//! Checks that pushing and pulling volume are in proportion, that upper and
//! lower body both get trained, and that no major muscle group is left
//! without direct work. Primary muscles earn full set credit, secondary
//! muscles half.

use std::collections::HashMap;

use crate::catalog::{ExerciseCatalog, MuscleGroup};
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

/// Push:pull set ratio considered balanced, inclusive
const BALANCED_RATIO: (f64, f64) = (0.67, 1.5);
/// Upper:lower set ratio beyond which one half dominates
const UPPER_LOWER_LIMIT: (f64, f64) = (0.5, 2.0);

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let principal = super::principal_exercises(plan, catalog);

    let mut muscle_sets: HashMap<MuscleGroup, f64> = HashMap::new();
    let mut push_sets = 0.0;
    let mut pull_sets = 0.0;
    let mut upper_sets = 0.0;
    let mut lower_sets = 0.0;

    for (_, assignment, entry) in &principal {
        let sets = f64::from(assignment.sets);
        for muscle in &entry.primary_muscles {
            *muscle_sets.entry(*muscle).or_default() += sets;
        }
        for muscle in &entry.secondary_muscles {
            *muscle_sets.entry(*muscle).or_default() += sets * 0.5;
        }
        if entry.pattern.is_push() {
            push_sets += sets;
        }
        if entry.pattern.is_pull() {
            pull_sets += sets;
        }
        if entry.pattern.is_upper_body() {
            upper_sets += sets;
        }
        if entry.pattern.is_lower_body() {
            lower_sets += sets;
        }
    }

    let mut points = 100.0;
    let mut issues = Vec::new();

    // Push/pull proportion; a completely one-sided plan is the harder fault
    if push_sets > 0.0 && pull_sets > 0.0 {
        let ratio = push_sets / pull_sets;
        if ratio < BALANCED_RATIO.0 || ratio > BALANCED_RATIO.1 {
            let dominant = if ratio > BALANCED_RATIO.1 { "pushing" } else { "pulling" };
            points -= 20.0;
            issues.push(QualityIssue::warning(
                format!(
                    "{} volume dominates: {:.0} push sets vs {:.0} pull sets",
                    capitalize(dominant),
                    push_sets,
                    pull_sets
                ),
                "Keep push and pull sets within roughly a 2:3 to 3:2 ratio",
            ));
        }
    } else if push_sets > 0.0 || pull_sets > 0.0 {
        let missing = if pull_sets == 0.0 { "pulling" } else { "pushing" };
        points -= 30.0;
        issues.push(QualityIssue::critical(
            format!("No {missing} work is programmed"),
            format!("Add at least one {missing} exercise per week"),
        ));
    }

    // Upper/lower proportion; zero lower volume counts as upper-dominant
    if upper_sets > 0.0 || lower_sets > 0.0 {
        let ratio = if lower_sets > 0.0 {
            upper_sets / lower_sets
        } else {
            f64::INFINITY
        };
        if ratio > UPPER_LOWER_LIMIT.1 {
            points -= 15.0;
            issues.push(QualityIssue::warning(
                "Upper-body volume far exceeds lower-body volume".to_string(),
                "Add squat or hinge work to rebalance the plan",
            ));
        } else if ratio < UPPER_LOWER_LIMIT.0 {
            points -= 15.0;
            issues.push(QualityIssue::warning(
                "Lower-body volume far exceeds upper-body volume".to_string(),
                "Add pushing or pulling work to rebalance the plan",
            ));
        }
    }

    // Direct work for every major group
    for group in MuscleGroup::MAJOR {
        let sets = muscle_sets.get(&group).copied().unwrap_or(0.0);
        if sets < 1.0 {
            points -= 5.0;
            issues.push(QualityIssue::info(
                format!("{} receive almost no direct work", group.description()),
                format!("Add an exercise targeting {}", group.description()),
            ));
        }
    }

    QualityDimension::new(DimensionKey::MuscleBalance, clamp_score(points), issues)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
