//! Session balance analyzer
//!
//! Detects weeks where training volume piles up on some days and leaves
//! others nearly empty, using the coefficient of variation of per-session
//! set totals. Sessions with only one or two principal exercises are
//! nudged to grow. Single-session plans have nothing to balance.

use crate::catalog::ExerciseCatalog;
use crate::plan::WorkoutPlan;
use crate::report::{clamp_score, DimensionKey, QualityDimension, QualityIssue};

/// CV above which per-session volume is considered uneven
const CV_WARNING_THRESHOLD: f64 = 0.4;
/// CV above which the unevenness is worth a note
const CV_INFO_THRESHOLD: f64 = 0.25;
/// Principal exercises below which a session counts as thin
const THIN_SESSION_EXERCISES: usize = 3;

pub(super) fn analyze(plan: &WorkoutPlan, catalog: &ExerciseCatalog) -> QualityDimension {
    if plan.sessions.len() < 2 {
        return QualityDimension::new(DimensionKey::SessionBalance, 100, Vec::new());
    }

    let principal = super::principal_exercises(plan, catalog);
    let mut set_totals = vec![0.0f64; plan.sessions.len()];
    let mut exercise_counts = vec![0usize; plan.sessions.len()];
    for (session_idx, assignment, _) in &principal {
        set_totals[*session_idx] += f64::from(assignment.sets);
        exercise_counts[*session_idx] += 1;
    }

    let mut points = 100.0;
    let mut issues = Vec::new();

    let mean = set_totals.iter().sum::<f64>() / set_totals.len() as f64;
    let cv = if mean > 0.0 {
        let variance = set_totals
            .iter()
            .map(|total| (total - mean).powi(2))
            .sum::<f64>()
            / set_totals.len() as f64;
        variance.sqrt() / mean
    } else {
        0.0
    };

    if cv > CV_WARNING_THRESHOLD {
        let min = set_totals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = set_totals.iter().copied().fold(0.0f64, f64::max);
        points -= 25.0;
        issues.push(QualityIssue::warning(
            format!(
                "Session volume is uneven: lightest day {:.0} sets, heaviest {:.0} sets",
                min, max
            ),
            "Move some exercises from the heaviest day to the lightest",
        ));
    } else if cv > CV_INFO_THRESHOLD {
        points -= 10.0;
        issues.push(QualityIssue::info(
            "Per-session volume varies noticeably across the week",
            "Even out the set totals between sessions",
        ));
    }

    for (session_idx, &count) in exercise_counts.iter().enumerate() {
        if count > 0 && count < THIN_SESSION_EXERCISES {
            let name = plan.sessions[session_idx]
                .name
                .clone()
                .unwrap_or_else(|| format!("Session {}", session_idx + 1));
            points -= 5.0;
            issues.push(QualityIssue::info(
                format!("{name} has only {count} principal exercise(s)"),
                format!("Add at least one more working exercise to {name}"),
            ));
        }
    }

    QualityDimension::new(DimensionKey::SessionBalance, clamp_score(points), issues)
}
