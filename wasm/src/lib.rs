//! Workout Quality WASM Module
//!
//! WebAssembly bindings so the quality analysis can run client-side in the
//! browser, directly against the plan the trainer is editing. JSON strings
//! in, JSON string out.

use wasm_bindgen::prelude::*;
use workout_quality_engine::{
    analyze_workout_quality as analyze, ExerciseCatalog, ExerciseCatalogEntry, QualityLevel,
    WorkoutPlan,
};

/// Analyze a workout plan against an exercise catalog
///
/// `plan_json` is a serialized `WorkoutPlan`; `catalog_json` is a serialized
/// array of catalog entries. Returns the serialized `QualityReport`, or the
/// serde error message on malformed input.
#[wasm_bindgen]
pub fn analyze_workout_quality(plan_json: &str, catalog_json: &str) -> Result<String, JsValue> {
    analyze_json(plan_json, catalog_json).map_err(|e| JsValue::from_str(&e))
}

/// JSON plumbing kept separate from the bindgen surface so it is testable on
/// any target
fn analyze_json(plan_json: &str, catalog_json: &str) -> Result<String, String> {
    let plan: WorkoutPlan =
        serde_json::from_str(plan_json).map_err(|e| format!("Invalid plan: {e}"))?;
    let entries: Vec<ExerciseCatalogEntry> =
        serde_json::from_str(catalog_json).map_err(|e| format!("Invalid catalog: {e}"))?;
    let catalog: ExerciseCatalog = entries.into_iter().collect();

    let report = analyze(&plan, &catalog);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Grade a 0-100 score into the dashboard's quality-level token
#[wasm_bindgen]
pub fn quality_level_for_score(score: u8) -> String {
    match QualityLevel::from_score(score.min(100)) {
        QualityLevel::Excellent => "eccellente",
        QualityLevel::Good => "buono",
        QualityLevel::Sufficient => "sufficiente",
        QualityLevel::NeedsImprovement => "da_migliorare",
    }
    .to_string()
}
