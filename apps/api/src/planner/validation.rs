//! Precondition checks for analysis records.
//!
//! Scores outside 0–100 are upstream bugs. They are rejected here instead of
//! clamped so a malformed record never turns into a plausible-looking plan.

use thiserror::Error;

use crate::models::analysis::AnalysisResult;

const SCORE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("overallScore must be between 0 and 100, got {0}")]
    OverallScoreOutOfRange(i32),

    #[error("industryBenchmark.averageScore must be between 0 and 100, got {0}")]
    BenchmarkOutOfRange(i32),

    #[error("score for section '{section}' must be between 0 and 100, got {score}")]
    SectionScoreOutOfRange { section: String, score: i32 },

    #[error("section keys must not be empty")]
    EmptySectionKey,
}

/// Checks every numeric precondition on the record. The first violation wins;
/// sections are checked in their natural order.
pub fn validate(analysis: &AnalysisResult) -> Result<(), AnalysisError> {
    if !SCORE_RANGE.contains(&analysis.overall_score) {
        return Err(AnalysisError::OverallScoreOutOfRange(analysis.overall_score));
    }

    let average = analysis.industry_benchmark.average_score;
    if !SCORE_RANGE.contains(&average) {
        return Err(AnalysisError::BenchmarkOutOfRange(average));
    }

    for (key, section) in &analysis.sections {
        if key.trim().is_empty() {
            return Err(AnalysisError::EmptySectionKey);
        }
        if !SCORE_RANGE.contains(&section.score) {
            return Err(AnalysisError::SectionScoreOutOfRange {
                section: key.clone(),
                score: section.score,
            });
        }
    }

    Ok(())
}
