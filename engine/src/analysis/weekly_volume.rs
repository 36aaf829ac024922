//! Weekly volume analyzer
//!
//! Projects per-muscle weekly set counts and compares them to the target
//! range for the plan's level. Both primary and secondary muscles earn full
//! set credit here: volume measures whether a muscle gets enough total work
//! over a week, unlike the balance dimension's short-term set distribution.
//!
//! When the written-out plan covers fewer (or more) days than the stated
//! weekly frequency, counted sets are scaled by
//! `sessions_per_week / sessions.len()` to estimate the true weekly volume.

use std::collections::HashMap;

use crate::catalog::{ExerciseCatalog, MuscleGroup};
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

/// Fraction of the range maximum beyond which volume counts as excessive
const OVERSHOOT_FACTOR: f64 = 1.3;

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let principal = super::principal_exercises(plan, catalog);

    let mut muscle_sets: HashMap<MuscleGroup, f64> = HashMap::new();
    for (_, assignment, entry) in &principal {
        let sets = f64::from(assignment.sets);
        for muscle in entry.primary_muscles.iter().chain(&entry.secondary_muscles) {
            *muscle_sets.entry(*muscle).or_default() += sets;
        }
    }

    let scale = if plan.sessions.is_empty() {
        0.0
    } else {
        f64::from(plan.sessions_per_week) / plan.sessions.len() as f64
    };
    let target = plan.level.weekly_set_target();

    let mut issues = Vec::new();
    let mut counted = 0u32;
    let mut under = 0u32;
    let mut over = 0u32;

    for group in MuscleGroup::MAJOR {
        let weekly = muscle_sets.get(&group).copied().unwrap_or(0.0) * scale;
        if weekly <= 0.0 {
            // Untrained groups are the balance dimension's finding
            continue;
        }
        counted += 1;
        if weekly < target.min {
            under += 1;
            issues.push(QualityIssue::warning(
                format!(
                    "{}: about {:.0} weekly sets, below the {:.0}-{:.0} target",
                    group.description(),
                    weekly,
                    target.min,
                    target.max
                ),
                format!("Add sets for {} across the week", group.description()),
            ));
        } else if weekly > target.max * OVERSHOOT_FACTOR {
            over += 1;
            issues.push(QualityIssue::info(
                format!(
                    "{}: about {:.0} weekly sets, well above the {:.0}-{:.0} target",
                    group.description(),
                    weekly,
                    target.min,
                    target.max
                ),
                format!("Trim some {} volume to aid recovery", group.description()),
            ));
        }
    }

    let points = if counted == 0 {
        100.0
    } else {
        let counted = f64::from(counted);
        100.0 - f64::from(under) / counted * 50.0 - f64::from(over) / counted * 20.0
    };

    QualityDimension::new(DimensionKey::WeeklyVolume, clamp_score(points), issues)
}
