use indexmap::IndexMap;
use tracing::debug;

use crate::models::analysis::AnalysisResult;

/// Settles the section layout of a freshly analyzed resume.
///
/// The model-reported `sectionOrder` is only trusted when it names exactly the
/// keys present in `sections`; the mapping is then reordered to match. Afterwards
/// `originalSectionOrder` is filled from the mapping's key order, unless the
/// record already carries one from structure extraction.
pub fn reconcile_section_order(mut analysis: AnalysisResult) -> AnalysisResult {
    if let Some(reported) = analysis.section_order.as_deref() {
        if same_key_set(&analysis, reported) {
            let mut reordered = IndexMap::with_capacity(analysis.sections.len());
            for key in reported {
                if let Some(section) = analysis.sections.shift_remove(key) {
                    reordered.insert(key.clone(), section);
                }
            }
            analysis.sections = reordered;
        } else {
            debug!(
                reported = reported.len(),
                sections = analysis.sections.len(),
                "sectionOrder does not match section keys; keeping document order"
            );
        }
    }

    if analysis.original_section_order.is_none() {
        analysis.original_section_order = Some(analysis.sections.keys().cloned().collect());
    }

    analysis
}

fn same_key_set(analysis: &AnalysisResult, reported: &[String]) -> bool {
    reported.iter().all(|k| analysis.sections.contains_key(k))
        && analysis
            .sections
            .keys()
            .all(|k| reported.iter().any(|r| r == k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Section;

    fn make_analysis(keys: &[&str], reported: Option<Vec<&str>>) -> AnalysisResult {
        let mut analysis = AnalysisResult {
            overall_score: 70,
            ..Default::default()
        };
        for key in keys {
            analysis
                .sections
                .insert(key.to_string(), Section::default());
        }
        analysis.section_order = reported.map(|o| o.iter().map(|k| k.to_string()).collect());
        analysis
    }

    fn keys(analysis: &AnalysisResult) -> Vec<&str> {
        analysis.sections.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_document_order_is_recorded() {
        let order = ["education", "work_experience", "professional_summary"];
        let result = reconcile_section_order(make_analysis(&order, None));

        assert_eq!(keys(&result), order);
        assert_eq!(result.original_section_order.unwrap(), order);
    }

    #[test]
    fn test_matching_reported_order_reorders_sections() {
        let result = reconcile_section_order(make_analysis(
            &["skills", "education", "experience"],
            Some(vec!["experience", "skills", "education"]),
        ));

        assert_eq!(keys(&result), vec!["experience", "skills", "education"]);
        assert_eq!(
            result.original_section_order.unwrap(),
            vec!["experience", "skills", "education"]
        );
    }

    #[test]
    fn test_mismatched_reported_order_is_ignored() {
        let result = reconcile_section_order(make_analysis(
            &["summary", "experience", "education"],
            Some(vec!["summary", "nonexistent", "education"]),
        ));

        assert_eq!(keys(&result), vec!["summary", "experience", "education"]);
        assert_eq!(
            result.original_section_order.unwrap(),
            vec!["summary", "experience", "education"]
        );
    }

    #[test]
    fn test_existing_original_order_is_kept() {
        let mut analysis = make_analysis(&["summary", "education"], None);
        analysis.original_section_order = Some(vec!["education".to_string()]);

        let result = reconcile_section_order(analysis);
        assert_eq!(result.original_section_order.unwrap(), vec!["education"]);
    }

    #[test]
    fn test_empty_sections_give_empty_order() {
        let result = reconcile_section_order(make_analysis(&[], None));
        assert_eq!(result.original_section_order, Some(vec![]));
    }
}
