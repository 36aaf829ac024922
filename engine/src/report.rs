//! Quality report value types
//!
//! Everything the analyzers produce: issues, per-dimension results, and the
//! consolidated report. These are plain values created fresh on every run;
//! nothing here is persisted by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Issues
// ============================================================================

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One finding raised by an analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl QualityIssue {
    pub fn info(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn warning(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn critical(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

// ============================================================================
// Levels and Scores
// ============================================================================

/// Qualitative grade derived from a 0-100 score
///
/// Wire tokens keep the dashboard's Italian vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLevel {
    #[serde(rename = "eccellente")]
    Excellent,
    #[serde(rename = "buono")]
    Good,
    #[serde(rename = "sufficiente")]
    Sufficient,
    #[serde(rename = "da_migliorare")]
    NeedsImprovement,
}

impl QualityLevel {
    /// Grade a score: >=85 excellent, >=70 good, >=50 sufficient
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            QualityLevel::Excellent
        } else if score >= 70 {
            QualityLevel::Good
        } else if score >= 50 {
            QualityLevel::Sufficient
        } else {
            QualityLevel::NeedsImprovement
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Good => "Good",
            QualityLevel::Sufficient => "Sufficient",
            QualityLevel::NeedsImprovement => "Needs improvement",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Round a raw point total and clamp it into the 0-100 score scale
pub fn clamp_score(points: f64) -> u8 {
    points.round().clamp(0.0, 100.0) as u8
}

// ============================================================================
// Dimensions
// ============================================================================

/// The seven analysis dimensions, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKey {
    MuscleBalance,
    PatternCoverage,
    WeeklyVolume,
    RepAlignment,
    Variety,
    Difficulty,
    SessionBalance,
}

impl DimensionKey {
    /// All dimensions, in declaration order
    pub const ALL: [DimensionKey; 7] = [
        DimensionKey::MuscleBalance,
        DimensionKey::PatternCoverage,
        DimensionKey::WeeklyVolume,
        DimensionKey::RepAlignment,
        DimensionKey::Variety,
        DimensionKey::Difficulty,
        DimensionKey::SessionBalance,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            DimensionKey::MuscleBalance => "Muscle balance",
            DimensionKey::PatternCoverage => "Movement pattern coverage",
            DimensionKey::WeeklyVolume => "Weekly volume",
            DimensionKey::RepAlignment => "Rep-range alignment",
            DimensionKey::Variety => "Exercise variety",
            DimensionKey::Difficulty => "Difficulty coherence",
            DimensionKey::SessionBalance => "Session balance",
        }
    }

    /// Weight of this dimension in the overall score; weights sum to 1.0
    pub fn weight(&self) -> f64 {
        match self {
            DimensionKey::MuscleBalance => 0.20,
            DimensionKey::PatternCoverage => 0.20,
            DimensionKey::WeeklyVolume => 0.15,
            DimensionKey::RepAlignment => 0.15,
            DimensionKey::Variety => 0.10,
            DimensionKey::Difficulty => 0.10,
            DimensionKey::SessionBalance => 0.10,
        }
    }
}

/// Result of one analysis dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityDimension {
    pub key: DimensionKey,
    pub label: String,
    pub score: u8,
    pub level: QualityLevel,
    pub issues: Vec<QualityIssue>,
}

impl QualityDimension {
    /// Build a dimension result; label and level are derived
    pub fn new(key: DimensionKey, score: u8, issues: Vec<QualityIssue>) -> Self {
        Self {
            key,
            label: key.label().to_string(),
            score,
            level: QualityLevel::from_score(score),
            issues,
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Score at or above which a dimension counts as a strength
pub const STRENGTH_THRESHOLD: u8 = 85;

/// Consolidated quality report for a workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Weighted overall score, 0-100
    pub score: u8,
    /// Grade of the overall score
    pub level: QualityLevel,
    /// The seven dimension results, in declaration order
    pub dimensions: Vec<QualityDimension>,
    /// Labels of dimensions scoring at or above the strength threshold
    pub strengths: Vec<String>,
}
