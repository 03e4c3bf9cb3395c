pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical issue severity, ordered lowest to highest.
///
/// The backend emits two vocabularies depending on which analyzer produced
/// the issue: `high/medium/low` and `error/warning/info`. Both collapse into
/// this enum at the serde boundary; nothing downstream branches on raw
/// strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Normalize a raw severity string. Unknown values land in the lowest
    /// bucket so backend vocabulary drift never breaks rendering.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "high" | "error" => Self::High,
            "medium" | "warning" => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::from_raw(&raw))
    }
}

/// Aggregate a file's issue list into its badge bucket.
///
/// `None` means no badge: the file has no issues at all. Any high issue wins,
/// then any medium, otherwise a non-empty list classifies low.
pub fn classify(issues: &[Issue]) -> Option<Severity> {
    issues.iter().map(|i| i.severity).max()
}

/// One defect finding within a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based source line
    pub line: u32,

    #[serde(default)]
    pub severity: Severity,

    /// Free-text classification ("quality", "security", "style", ...)
    #[serde(default, alias = "type")]
    pub category: String,

    #[serde(default, alias = "issue")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Structured metrics for one analyzed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMetrics {
    pub lines_of_code: u64,
    pub cyclomatic_complexity: u64,
    pub maintainability_index: f64,
    pub comment_ratio: f64,
    pub function_count: u64,
    pub class_count: u64,
    pub max_function_length: f64,
    pub avg_function_length: f64,
}

/// One analyzed source file, as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Forward-slash-separated path relative to the repository root
    pub file_path: String,

    #[serde(default = "default_file_type")]
    pub file_type: String,

    #[serde(default)]
    pub metrics: FileMetrics,

    /// Issues in detection order, not line order
    #[serde(default)]
    pub issues: Vec<Issue>,

    #[serde(default)]
    pub is_key_file: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_percentage: Option<f64>,

    /// Dashboard flags ("High AI%", "Vibe-Coded", ...)
    #[serde(default)]
    pub flags: Vec<String>,
}

fn default_file_type() -> String {
    "unknown".to_string()
}

/// Repository identity attached to a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    pub full_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub stars_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub repo_id: Option<String>,

    #[serde(default)]
    pub analysis_date: Option<DateTime<Utc>>,
}

/// One axis of the category breakdown (Quality, Security, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,

    #[serde(default)]
    pub description: Option<String>,
}

/// Complete analysis report for one repository.
///
/// This is the flat analysis feed: `file_analyses` is ordered by the backend
/// and immutable from the dashboard's perspective. Everything rendered is
/// derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub repo: RepoInfo,

    #[serde(default)]
    pub overall_score: f64,

    #[serde(default)]
    pub previous_score: Option<f64>,

    #[serde(default)]
    pub ai_percentage: f64,

    #[serde(default)]
    pub category_scores: Vec<CategoryScore>,

    #[serde(default)]
    pub file_analyses: Vec<FileAnalysis>,
}
