//! Section ordering for display.
//!
//! Two strategies, chosen once per record:
//! - `Explicit`: the resume's own layout (`originalSectionOrder`). Keys missing
//!   from that list are left out of the view; the data itself is untouched.
//! - `Derived`: conventional resume order from a keyword tier table.

use serde::Serialize;

use crate::models::analysis::{AnalysisResult, Section};

/// Tier table scanned top to bottom; the first tier whose keyword occurs in
/// the lower-cased key wins. Keys matching nothing land in `FALLBACK_TIER`.
const SECTION_TIERS: &[(u8, &[&str])] = &[
    (0, &["summary", "objective", "profile", "about", "overview"]),
    (1, &["experience", "work", "employment", "professional"]),
    (2, &["project", "portfolio"]),
    (3, &["skill", "competenc", "technologies", "technical"]),
    (4, &["education", "academic", "degree"]),
    (5, &["certification", "license", "training"]),
    (6, &["award", "achievement", "honor"]),
    (7, &["publication", "research"]),
    (8, &["volunteer", "extracurricular", "interest", "hobby"]),
];

const FALLBACK_TIER: u8 = 9;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderedSection<'a> {
    pub key: &'a str,
    pub display_name: String,
    pub section: &'a Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOrder<'a> {
    Explicit(&'a [String]),
    Derived,
}

impl<'a> SectionOrder<'a> {
    pub fn for_analysis(analysis: &'a AnalysisResult) -> Self {
        match analysis.original_section_order.as_deref() {
            Some(order) => SectionOrder::Explicit(order),
            None => SectionOrder::Derived,
        }
    }
}

/// Returns the record's sections in display order.
pub fn order_sections(analysis: &AnalysisResult) -> Vec<OrderedSection<'_>> {
    let keys: Vec<&str> = match SectionOrder::for_analysis(analysis) {
        SectionOrder::Explicit(order) => explicit_order(analysis, order),
        SectionOrder::Derived => derived_order(analysis),
    };

    keys.into_iter()
        .filter_map(|key| {
            analysis
                .sections
                .get_key_value(key)
                .map(|(key, section)| OrderedSection {
                    key: key.as_str(),
                    display_name: display_name(key, section),
                    section,
                })
        })
        .collect()
}

fn explicit_order<'a>(analysis: &AnalysisResult, order: &'a [String]) -> Vec<&'a str> {
    let mut keys: Vec<&str> = Vec::with_capacity(order.len());
    for key in order {
        // repeated keys keep their first position
        if analysis.sections.contains_key(key) && !keys.contains(&key.as_str()) {
            keys.push(key.as_str());
        }
    }
    keys
}

fn derived_order(analysis: &AnalysisResult) -> Vec<&str> {
    let mut keys: Vec<&str> = analysis.sections.keys().map(String::as_str).collect();
    // sort_by_key is stable, so ties keep mapping order
    keys.sort_by_key(|key| section_tier(key));
    keys
}

/// Tier of a section key in the conventional resume layout (0 = first).
pub fn section_tier(key: &str) -> u8 {
    let key = key.to_lowercase();
    SECTION_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| key.contains(kw)))
        .map(|(tier, _)| *tier)
        .unwrap_or(FALLBACK_TIER)
}

/// Label shown for a section: its own `displayName` when set, else a
/// title-cased form of the key.
pub fn display_name(key: &str, section: &Section) -> String {
    match section.display_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => humanize_key(key),
    }
}

/// `work_experience` -> `Work Experience`. Only the first letter of each word
/// is touched; `gpa_and_GRE` keeps its capitals.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}
