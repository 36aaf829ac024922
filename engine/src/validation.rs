//! Input validation functions
//!
//! Checks the UI boundary runs before handing a plan to the analyzers.
//! Uses both custom validators and the `validator` crate's derive rules on
//! the plan types.

use crate::errors::PlanError;
use crate::plan::WorkoutPlan;
use validator::Validate;

/// Validate a set count
pub fn validate_set_count(sets: u32) -> Result<(), PlanError> {
    if sets == 0 {
        return Err(PlanError::field("sets", "must be at least 1"));
    }
    if sets > 30 {
        return Err(PlanError::field("sets", "must be at most 30"));
    }
    Ok(())
}

/// Validate a weekly training frequency
pub fn validate_sessions_per_week(sessions_per_week: u32) -> Result<(), PlanError> {
    if sessions_per_week == 0 {
        return Err(PlanError::field("sessions_per_week", "must be at least 1"));
    }
    if sessions_per_week > 14 {
        return Err(PlanError::field("sessions_per_week", "must be at most 14"));
    }
    Ok(())
}

/// Validate a rep specification string
///
/// Only bounds the shape; free text that does not parse is still accepted
/// and simply carries no rep count during analysis.
pub fn validate_rep_spec(reps: &str) -> Result<(), PlanError> {
    if reps.trim().is_empty() {
        return Err(PlanError::field("reps", "cannot be empty"));
    }
    if reps.len() > 32 {
        return Err(PlanError::field("reps", "too long"));
    }
    Ok(())
}

/// Validate a whole plan before analysis
///
/// Runs the derive-based rules plus the scalar checks. An empty session
/// list is valid: the analyzers produce a complete (if alarming) report for
/// an empty plan rather than refusing it.
pub fn validate_plan(plan: &WorkoutPlan) -> Result<(), PlanError> {
    plan.validate()
        .map_err(|e| PlanError::Validation(e.to_string()))?;

    validate_sessions_per_week(plan.sessions_per_week)?;
    for session in &plan.sessions {
        for assignment in &session.exercises {
            validate_set_count(assignment.sets)?;
            validate_rep_spec(&assignment.reps)?;
        }
    }
    Ok(())
}
