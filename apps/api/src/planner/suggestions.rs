//! Suggestion aggregation and step ranking.
//!
//! Every suggestion is flattened into a priority bucket tagged with the
//! section it came from. Critical improvements become extra high-priority
//! items. The buckets then drive at most three ranked steps, always emitted
//! in the same order: critical fixes, keywords, weak sections.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::analysis::{AnalysisResult, Priority};
use crate::planner::ordering::{display_name, humanize_key};

/// Section used for critical improvements when the record has no sections.
pub const FALLBACK_SECTION: &str = "resume";
/// Keyword step target when the record has no sections.
pub const FALLBACK_SKILLS_SECTION: &str = "skills";

pub const STEP_FIX_CRITICAL: &str = "Fix critical issues";
pub const STEP_ADD_KEYWORDS: &str = "Add missing keywords";
pub const STEP_STRENGTHEN_WEAK: &str = "Strengthen weak sections";

const KEYWORD_POINTS_CAP: u32 = 5;
const MAX_WEAK_LABELS: usize = 3;
const SKILL_SECTION_MARKERS: &[&str] = &["skill", "technologies"];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaggedSuggestion {
    pub text: String,
    pub priority: Priority,
    pub section_key: String,
    pub section_label: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SuggestionBuckets {
    pub high: Vec<TaggedSuggestion>,
    pub medium: Vec<TaggedSuggestion>,
    pub low: Vec<TaggedSuggestion>,
}

impl SuggestionBuckets {
    pub fn total(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, item: TaggedSuggestion) {
        match item.priority {
            Priority::High => self.high.push(item),
            Priority::Medium => self.medium.push(item),
            Priority::Low => self.low.push(item),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedStep {
    pub title: String,
    pub description: String,
    pub points_estimate: u32,
    pub target_section: String,
    pub target_section_label: String,
}

/// Expected score gain from fixing `count` suggestions of one priority.
/// Capped per tier: piling up fixes in one tier stops paying off linearly.
pub fn estimate_points(priority: Priority, count: usize) -> u32 {
    let (per_item, cap): (u32, u32) = match priority {
        Priority::High => (3, 10),
        Priority::Medium => (2, 7),
        Priority::Low => (1, 4),
    };
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    per_item.saturating_mul(count).min(cap)
}

/// Flattens section suggestions and critical improvements into buckets.
pub fn aggregate(analysis: &AnalysisResult) -> SuggestionBuckets {
    let mut buckets = SuggestionBuckets::default();

    for (key, section) in &analysis.sections {
        let label = display_name(key, section);
        for suggestion in &section.suggestions {
            buckets.push(TaggedSuggestion {
                text: suggestion.text.clone(),
                priority: suggestion.priority,
                section_key: key.clone(),
                section_label: label.clone(),
            });
        }
    }

    let (critical_key, critical_label) = match analysis.sections.first() {
        Some((key, section)) => (key.clone(), display_name(key, section)),
        None => (FALLBACK_SECTION.to_string(), FALLBACK_SECTION.to_string()),
    };
    for text in &analysis.critical_improvements {
        buckets.push(TaggedSuggestion {
            text: text.clone(),
            priority: Priority::High,
            section_key: critical_key.clone(),
            section_label: critical_label.clone(),
        });
    }

    buckets
}

/// Builds up to three steps from the buckets, most impactful first.
pub fn rank_steps(analysis: &AnalysisResult, buckets: &SuggestionBuckets) -> Vec<RankedStep> {
    [
        critical_step(&buckets.high),
        keyword_step(analysis),
        weak_sections_step(&buckets.medium),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn critical_step(high: &[TaggedSuggestion]) -> Option<RankedStep> {
    let first = high.first()?;
    let target = most_frequent_section(high)?;

    Some(RankedStep {
        title: STEP_FIX_CRITICAL.to_string(),
        description: first.text.clone(),
        points_estimate: estimate_points(Priority::High, high.len()),
        target_section: target.section_key.clone(),
        target_section_label: target.section_label.clone(),
    })
}

/// Section key hit most often; ties go to the key seen first.
fn most_frequent_section(items: &[TaggedSuggestion]) -> Option<&TaggedSuggestion> {
    let mut counts: IndexMap<&str, (usize, &TaggedSuggestion)> = IndexMap::new();
    for item in items {
        counts
            .entry(item.section_key.as_str())
            .or_insert((0, item))
            .0 += 1;
    }

    let mut best: Option<(usize, &TaggedSuggestion)> = None;
    for (count, item) in counts.into_values() {
        if best.map_or(true, |(best_count, _)| count > best_count) {
            best = Some((count, item));
        }
    }
    best.map(|(_, item)| item)
}

fn keyword_step(analysis: &AnalysisResult) -> Option<RankedStep> {
    let count = analysis.keywords_missing.len();
    if count == 0 {
        return None;
    }

    let skills_section = analysis.sections.iter().find(|(key, _)| {
        let key = key.to_lowercase();
        SKILL_SECTION_MARKERS.iter().any(|m| key.contains(m))
    });
    let (target_section, target_section_label) =
        match skills_section.or_else(|| analysis.sections.first()) {
            Some((key, section)) => (key.clone(), display_name(key, section)),
            None => (
                FALLBACK_SKILLS_SECTION.to_string(),
                humanize_key(FALLBACK_SKILLS_SECTION),
            ),
        };

    let noun = if count == 1 { "keyword" } else { "keywords" };
    Some(RankedStep {
        title: STEP_ADD_KEYWORDS.to_string(),
        description: format!("Add {count} missing {noun} recruiters and ATS filters look for"),
        points_estimate: u32::try_from(count)
            .unwrap_or(u32::MAX)
            .min(KEYWORD_POINTS_CAP),
        target_section,
        target_section_label,
    })
}

fn weak_sections_step(medium: &[TaggedSuggestion]) -> Option<RankedStep> {
    let first = medium.first()?;

    let mut labels: Vec<&str> = Vec::with_capacity(MAX_WEAK_LABELS);
    for item in medium {
        if labels.len() == MAX_WEAK_LABELS {
            break;
        }
        if !labels.contains(&item.section_label.as_str()) {
            labels.push(item.section_label.as_str());
        }
    }

    // always " and ", even for three labels: "A and B and C need work"
    let verb = if labels.len() == 1 { "needs" } else { "need" };
    Some(RankedStep {
        title: STEP_STRENGTHEN_WEAK.to_string(),
        description: format!("{} {verb} work", labels.join(" and ")),
        points_estimate: estimate_points(Priority::Medium, medium.len()),
        target_section: first.section_key.clone(),
        target_section_label: first.section_label.clone(),
    })
}
