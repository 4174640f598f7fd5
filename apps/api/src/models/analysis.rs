use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cohort average reported by the analysis service when it has no benchmark.
pub const DEFAULT_BENCHMARK_AVERAGE: i32 = 62;

/// A per-section resume analysis, as produced by the upstream analysis service.
///
/// `sections` keeps JSON document order; "first section" anywhere in the
/// planner means the first key of this mapping. Fields the planner does not
/// read (contact info, ATS issues, ...) survive a round-trip through `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub sections: IndexMap<String, Section>,
    pub overall_score: i32,
    #[serde(default)]
    pub industry_benchmark: IndustryBenchmark,
    #[serde(default)]
    pub keywords_missing: Vec<String>,
    #[serde(default)]
    pub critical_improvements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_section_order: Option<Vec<String>>,
    /// Raw order reported by the model; only trusted after reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_order: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    #[serde(default = "default_average_score")]
    pub average_score: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IndustryBenchmark {
    fn default() -> Self {
        Self {
            average_score: DEFAULT_BENCHMARK_AVERAGE,
            extra: Map::new(),
        }
    }
}

fn default_average_score() -> i32 {
    DEFAULT_BENCHMARK_AVERAGE
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub content: String,
    pub score: i32,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
