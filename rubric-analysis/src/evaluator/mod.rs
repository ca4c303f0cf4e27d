//! Requirement evaluation: applicable-subset filtering and weighted
//! scoring.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::classifier::FileType;

/// Pass/fail for a single requirement, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementOutcome {
    pub requirement_id: String,
    pub passed: bool,
}

/// Aggregated score for one file against one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub per_requirement: Vec<RequirementOutcome>,
    /// Sum of weights of the applicable subset, not the full catalog.
    pub total_points: u32,
    pub earned_points: u32,
    /// Rounded percentage in [0, 100]; 0 when nothing was applicable.
    pub percentage: u32,
}

/// Score `content` against the applicable subset of `catalog`.
///
/// A predicate that panics counts as failed and is logged; the remaining
/// requirements still run, so one bad predicate can never abort scoring.
/// All predicates are pure, so repeated calls with identical arguments
/// produce identical results.
pub fn evaluate(
    content: &str,
    catalog: &Catalog,
    file_type: Option<FileType>,
) -> EvaluationResult {
    let mut per_requirement = Vec::new();
    let mut total_points = 0u32;
    let mut earned_points = 0u32;

    for def in catalog.applicable(file_type) {
        let passed = catch_unwind(AssertUnwindSafe(|| def.check.evaluate(content)))
            .unwrap_or_else(|_| {
                tracing::warn!(id = %def.id, "predicate panicked; treating as failed");
                false
            });
        total_points += def.points;
        if passed {
            earned_points += def.points;
        }
        per_requirement.push(RequirementOutcome {
            requirement_id: def.id.clone(),
            passed,
        });
    }

    let percentage = if total_points == 0 {
        0
    } else {
        (f64::from(earned_points) * 100.0 / f64::from(total_points)).round() as u32
    };

    EvaluationResult {
        per_requirement,
        total_points,
        earned_points,
        percentage,
    }
}
