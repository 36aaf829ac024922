//! Workout plan input types and rep-spec parsing
//!
//! A plan is one week of scheduled sessions, each holding ordered exercise
//! assignments with their set/rep configuration, plus the metadata the
//! analyzers need: training goal, athlete level, and stated weekly
//! frequency (which may differ from the number of sessions written out).

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Goals and Levels
// ============================================================================

/// Training goal of the plan
///
/// Wire tokens keep the dashboard's Italian vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrainingGoal {
    #[serde(rename = "forza")]
    Strength,
    #[serde(rename = "ipertrofia")]
    Hypertrophy,
    #[serde(rename = "resistenza")]
    Endurance,
    #[serde(rename = "dimagrimento")]
    FatLoss,
    #[default]
    #[serde(rename = "generale")]
    General,
}

impl TrainingGoal {
    /// Rep range this goal is best served by, inclusive on both ends
    ///
    /// `General` has no target range: any rep scheme is acceptable.
    pub fn target_rep_range(&self) -> Option<RepRange> {
        match self {
            TrainingGoal::Strength => Some(RepRange::new(1.0, 6.0)),
            TrainingGoal::Hypertrophy => Some(RepRange::new(6.0, 12.0)),
            TrainingGoal::Endurance => Some(RepRange::new(12.0, 20.0)),
            TrainingGoal::FatLoss => Some(RepRange::new(8.0, 15.0)),
            TrainingGoal::General => None,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            TrainingGoal::Strength => "Strength",
            TrainingGoal::Hypertrophy => "Hypertrophy",
            TrainingGoal::Endurance => "Endurance",
            TrainingGoal::FatLoss => "Fat loss",
            TrainingGoal::General => "General fitness",
        }
    }
}

/// Experience level the plan is written for
///
/// Distinct from [`crate::catalog::ExerciseDifficulty`]: this grades the
/// athlete, not one movement. Wire tokens keep the dashboard's Italian
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlanLevel {
    #[serde(rename = "principiante")]
    Beginner,
    #[default]
    #[serde(rename = "intermedio")]
    Intermediate,
    #[serde(rename = "avanzato")]
    Advanced,
}

impl PlanLevel {
    /// Numeric index used for difficulty-gap arithmetic
    pub fn index(&self) -> u8 {
        match self {
            PlanLevel::Beginner => 0,
            PlanLevel::Intermediate => 1,
            PlanLevel::Advanced => 2,
        }
    }

    /// Weekly set target per major muscle group for this level
    pub fn weekly_set_target(&self) -> RepRange {
        match self {
            PlanLevel::Beginner => RepRange::new(8.0, 12.0),
            PlanLevel::Intermediate => RepRange::new(12.0, 18.0),
            PlanLevel::Advanced => RepRange::new(16.0, 24.0),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            PlanLevel::Beginner => "Beginner",
            PlanLevel::Intermediate => "Intermediate",
            PlanLevel::Advanced => "Advanced",
        }
    }
}

/// Inclusive numeric range used for rep and set targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepRange {
    pub min: f64,
    pub max: f64,
}

impl RepRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a value falls inside the range, inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ============================================================================
// Plan Structure
// ============================================================================

/// One exercise slot inside a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExerciseAssignment {
    /// Identifier of the exercise in the catalog
    pub exercise_id: String,
    /// Number of working sets
    #[validate(range(min = 1, max = 30, message = "Set count must be 1-30"))]
    pub sets: u32,
    /// Rep specification: "10", "8-12", or time-based like "30s"
    #[validate(length(max = 32, message = "Rep specification too long"))]
    pub reps: String,
}

/// One scheduled training day
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WorkoutSession {
    /// Optional display name ("Day A", "Push", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered exercise assignments
    #[validate(nested)]
    pub exercises: Vec<ExerciseAssignment>,
}

/// One week of programmed training
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkoutPlan {
    /// Ordered sessions; may be fewer or more than the stated frequency
    #[validate(nested)]
    pub sessions: Vec<WorkoutSession>,
    /// Training goal
    pub goal: TrainingGoal,
    /// Athlete level the plan is written for
    pub level: PlanLevel,
    /// Stated training frequency in days per week
    #[validate(range(min = 1, max = 14, message = "Weekly frequency must be 1-14"))]
    pub sessions_per_week: u32,
}

impl WorkoutPlan {
    /// Total number of exercise assignments across all sessions
    pub fn assignment_count(&self) -> usize {
        self.sessions.iter().map(|s| s.exercises.len()).sum()
    }
}

// ============================================================================
// Rep-Spec Parsing
// ============================================================================

/// Parse a rep specification into a comparable rep count
///
/// Accepts a plain integer ("10") or a range ("8-12", scored at its
/// midpoint). Time-based specs ("30s", "45 sec") carry no rep count and
/// return `None`, as does anything else that does not match; such entries
/// are excluded from rep-alignment scoring rather than penalized.
pub fn parse_rep_value(spec: &str) -> Option<f64> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }
    // Any 's' marks a duration ("30s", "45 sec", "max 20s hold")
    if spec.to_lowercase().contains('s') {
        return None;
    }

    let range_re = regex_lite::Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap();
    if let Some(caps) = range_re.captures(spec) {
        let low: f64 = caps[1].parse().ok()?;
        let high: f64 = caps[2].parse().ok()?;
        return Some((low + high) / 2.0);
    }

    let plain_re = regex_lite::Regex::new(r"^(\d+)$").unwrap();
    if let Some(caps) = plain_re.captures(spec) {
        return caps[1].parse().ok();
    }

    None
}
