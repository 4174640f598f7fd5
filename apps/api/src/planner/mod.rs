// Resume Improvement Planner
// Turns one analysis record into ordered sections, ranked steps and a score journey.
// Pure and synchronous: no I/O, no shared state, same input gives the same plan.

pub mod handlers;
pub mod journey;
pub mod normalize;
pub mod ordering;
pub mod suggestions;
pub mod validation;

use serde::Serialize;
use tracing::debug;

use crate::models::analysis::AnalysisResult;

pub use journey::{journey_milestones, JourneyMilestones, JourneyPositions};
pub use ordering::{order_sections, OrderedSection};
pub use suggestions::{aggregate, rank_steps, RankedStep, SuggestionBuckets};
pub use validation::{validate, AnalysisError};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub ranked_steps: Vec<RankedStep>,
    pub buckets: SuggestionBuckets,
    pub journey: JourneyMilestones,
    pub positions: JourneyPositions,
}

/// Builds the improvement plan for a validated-on-entry analysis record.
///
/// Returns `Ok(None)` when the record carries no suggestions and no critical
/// improvements: there is nothing to show, which is different from a plan
/// whose steps happen to be empty (e.g. only low-priority suggestions).
pub fn plan(analysis: &AnalysisResult) -> Result<Option<Plan>, AnalysisError> {
    validate(analysis)?;

    let buckets = aggregate(analysis);
    if buckets.is_empty() {
        debug!(
            keywords_missing = analysis.keywords_missing.len(),
            "No suggestions in analysis, skipping plan"
        );
        return Ok(None);
    }

    let ranked_steps = rank_steps(analysis, &buckets);
    let journey = journey_milestones(
        analysis.overall_score,
        analysis.industry_benchmark.average_score,
    );

    debug!(
        steps = ranked_steps.len(),
        high = buckets.high.len(),
        medium = buckets.medium.len(),
        low = buckets.low.len(),
        "Plan built"
    );

    Ok(Some(Plan {
        ranked_steps,
        buckets,
        positions: journey.positions(),
        journey,
    }))
}
