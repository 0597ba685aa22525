use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Successful response from `POST /api/upload`.
///
/// Only `session_id` is guaranteed; everything else is treated as optional
/// because the service contract does not promise payload completeness.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<u64>,
    pub status: Option<String>,
}

/// Request body for `POST /api/analysis/{session_id}/analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest {
    pub enabled_rules: Vec<String>,
    pub config: serde_json::Value,
}

/// Successful response from `POST /api/analysis/{session_id}/analyze`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub scores: ScoresPayload,
    #[serde(default)]
    pub findings_by_severity: HashMap<String, u64>,
    #[serde(default)]
    pub metadata: AnalysisMetadata,
}

/// The `scores` block of an analysis response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoresPayload {
    #[serde(default)]
    pub overall_score: f64,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default)]
    pub issues_per_slide: f64,
}

/// The `metadata` block of an analysis response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisMetadata {
    pub slide_count: Option<u64>,
    #[serde(default)]
    pub rules_run: Vec<String>,
    pub presentation_title: Option<String>,
}

/// One rule from `GET /api/analysis/rules`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuleInfo {
    pub rule_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response from `GET /api/analysis/rules`
#[derive(Debug, Deserialize)]
pub struct RulesResponse {
    #[serde(default)]
    pub rules: HashMap<String, RuleInfo>,
}

/// Extract the `detail` string from a failure body, if the body is JSON with
/// a string `detail` field. Any other shape yields `None`.
pub fn service_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

/// Display message for a non-success response: the service-provided `detail`
/// when present, a generic status line otherwise
pub fn failure_message(status: u16, body: &str) -> String {
    service_detail(body).unwrap_or_else(|| format!("service returned HTTP {}", status))
}
