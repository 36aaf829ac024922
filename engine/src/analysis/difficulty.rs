//! Difficulty coherence analyzer
//!
//! Compares each principal exercise's technical difficulty to the level the
//! plan is written for. An exact match earns full credit, one step off earns
//! partial credit, two steps earn none. Exercises well above the athlete's
//! level are flagged; exercises below it only dilute the score.

use crate::catalog::{ExerciseCatalog, ExerciseDifficulty};
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

/// Credit for an exercise one difficulty step away from the plan level
const NEAR_MISS_CREDIT: f64 = 0.7;
/// Share of too-hard exercises at which the plan is unsafe as written
const TOO_HARD_CRITICAL_SHARE: f64 = 0.3;
/// Score ceiling applied when the critical share is reached
const TOO_HARD_SCORE_CAP: u8 = 40;

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    let principal = super::principal_exercises(plan, catalog);
    if principal.is_empty() {
        return QualityDimension::new(DimensionKey::Difficulty, 100, Vec::new());
    }

    let plan_index = i32::from(plan.level.index());
    let mut issues = Vec::new();
    let mut credit = 0.0;
    let mut too_hard = 0u32;

    for (_, _, entry) in &principal {
        let gap = i32::from(entry.difficulty.index()) - plan_index;
        match gap.abs() {
            0 => credit += 1.0,
            1 => credit += NEAR_MISS_CREDIT,
            _ => {
                if gap > 0 {
                    too_hard += 1;
                    issues.push(QualityIssue::warning(
                        format!(
                            "{} is {} while the plan targets a {} athlete",
                            entry.name,
                            movement_grade(entry.difficulty),
                            plan.level.description().to_lowercase()
                        ),
                        format!("Swap {} for an easier progression", entry.name),
                    ));
                }
            }
        }
    }

    let total = principal.len() as f64;
    let mut score = clamp_score(100.0 * credit / total);

    if f64::from(too_hard) / total >= TOO_HARD_CRITICAL_SHARE {
        issues.insert(
            0,
            QualityIssue::critical(
                "A large share of the exercises exceed the athlete's level",
                "Rebuild the plan around movements the athlete can perform safely",
            ),
        );
        score = score.min(TOO_HARD_SCORE_CAP);
    }

    QualityDimension::new(DimensionKey::Difficulty, score, issues)
}

fn movement_grade(difficulty: ExerciseDifficulty) -> &'static str {
    match difficulty {
        ExerciseDifficulty::Beginner => "a beginner movement",
        ExerciseDifficulty::Intermediate => "an intermediate movement",
        ExerciseDifficulty::Advanced => "an advanced movement",
    }
}
