//! Axum route handlers for the Analysis API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::planner::normalize::reconcile_section_order;
use crate::planner::{order_sections, plan, validate, OrderedSection, Plan};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse<'a> {
    pub ordered_sections: Vec<OrderedSection<'a>>,
    #[serde(flatten)]
    pub plan: Plan,
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse<'a> {
    pub sections: Vec<OrderedSection<'a>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/plan
///
/// Returns the improvement plan, or 204 No Content when the analysis has
/// nothing to act on.
pub async fn handle_plan(Json(analysis): Json<AnalysisResult>) -> Result<Response, AppError> {
    let Some(plan) = plan(&analysis)? else {
        info!(
            sections = analysis.sections.len(),
            "Analysis has no suggestions, returning no plan"
        );
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    info!(
        steps = plan.ranked_steps.len(),
        current = plan.journey.current,
        target = plan.journey.target,
        "Improvement plan computed"
    );

    Ok(Json(PlanResponse {
        ordered_sections: order_sections(&analysis),
        plan,
    })
    .into_response())
}

/// POST /api/v1/analysis/sections
///
/// Returns the sections in display order with resolved labels.
pub async fn handle_sections(
    Json(analysis): Json<AnalysisResult>,
) -> Result<Response, AppError> {
    validate(&analysis)?;

    Ok(Json(SectionsResponse {
        sections: order_sections(&analysis),
    })
    .into_response())
}

/// POST /api/v1/analysis/normalize
///
/// Settles `originalSectionOrder` on a freshly analyzed record.
pub async fn handle_normalize(
    Json(analysis): Json<AnalysisResult>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate(&analysis)?;
    Ok(Json(reconcile_section_order(analysis)))
}
