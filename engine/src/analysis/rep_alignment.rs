//! Rep-range alignment analyzer
//!
//! Scores how much of the principal work falls inside the rep range the
//! plan's goal calls for. Time-based and free-text rep specs carry no rep
//! count and are excluded rather than penalized. A general-fitness goal has
//! no target range and always scores perfectly.

use crate::catalog::ExerciseCatalog;
use crate::plan::{parse_rep_value, WorkoutPlan};
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let Some(target) = plan.goal.target_rep_range() else {
        return QualityDimension::new(DimensionKey::RepAlignment, 100, Vec::new());
    };

    let mut issues = Vec::new();
    let mut total = 0u32;
    let mut aligned = 0u32;

    for (_, assignment, entry) in super::principal_exercises(plan, catalog) {
        let Some(reps) = parse_rep_value(&assignment.reps) else {
            continue;
        };
        total += 1;
        if target.contains(reps) {
            aligned += 1;
        } else {
            let direction = if reps < target.min { "below" } else { "above" };
            issues.push(QualityIssue::info(
                format!(
                    "{}: about {:.0} reps is {} the {} range of {:.0}-{:.0}",
                    entry.name,
                    reps,
                    direction,
                    plan.goal.description().to_lowercase(),
                    target.min,
                    target.max
                ),
                format!("Program {} at {:.0}-{:.0} reps", entry.name, target.min, target.max),
            ));
        }
    }

    let score = if total == 0 {
        100
    } else {
        clamp_score(100.0 * f64::from(aligned) / f64::from(total))
    };

    if total > 0 && f64::from(aligned) / f64::from(total) < 0.5 {
        issues.insert(
            0,
            QualityIssue::warning(
                format!(
                    "Fewer than half of the exercises match the {} rep range",
                    plan.goal.description().to_lowercase()
                ),
                format!("Move most working sets into {:.0}-{:.0} reps", target.min, target.max),
            ),
        );
    }

    QualityDimension::new(DimensionKey::RepAlignment, score, issues)
}
