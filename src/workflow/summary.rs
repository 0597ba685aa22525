use crate::api::models::AnalyzeResponse;
use std::fmt;
use tracing::warn;

/// Severity levels the service reports, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }

    pub fn parse(name: &str) -> Option<Severity> {
        match name.to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade summarizing the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Case-folded parse of the service's grade string
    pub fn parse(label: &str) -> Option<Grade> {
        match label.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

/// What the results panel shows, mapped from one analysis response.
/// Superseded entirely by the next analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub overall_score: f64,
    /// None when the service sent a grade outside A-F
    pub grade: Option<Grade>,
    pub total_issues: u64,
    pub issues_per_slide: f64,
    severity_counts: [u64; 5],
    pub slide_count: Option<u64>,
    pub rules_run: Vec<String>,
    pub presentation_title: Option<String>,
}

impl AnalysisSummary {
    /// Pure mapping from the wire payload. Severities absent from the payload
    /// count zero; unknown severity names are dropped.
    pub fn from_response(response: &AnalyzeResponse) -> Self {
        let mut severity_counts = [0u64; 5];
        for (name, count) in &response.findings_by_severity {
            match Severity::parse(name) {
                Some(severity) => severity_counts[severity as usize] = *count,
                None => warn!("Unknown severity '{}' in analysis response", name),
            }
        }

        Self {
            overall_score: response.scores.overall_score,
            grade: Grade::parse(&response.scores.grade),
            total_issues: response.scores.total_issues,
            issues_per_slide: response.scores.issues_per_slide,
            severity_counts,
            slide_count: response.metadata.slide_count,
            rules_run: response.metadata.rules_run.clone(),
            presentation_title: response.metadata.presentation_title.clone(),
        }
    }

    pub fn count(&self, severity: Severity) -> u64 {
        self.severity_counts[severity as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_scores_and_defaults_missing_severities_to_zero() {
        let response: AnalyzeResponse = serde_json::from_str(
            r#"{
                "scores": {"overall_score": 87, "grade": "B", "total_issues": 12, "issues_per_slide": 1.2},
                "findings_by_severity": {"high": 3, "low": 9}
            }"#,
        )
        .unwrap();

        let summary = AnalysisSummary::from_response(&response);
        assert_eq!(summary.overall_score, 87.0);
        assert_eq!(summary.grade, Some(Grade::B));
        assert_eq!(summary.total_issues, 12);
        assert_eq!(summary.issues_per_slide, 1.2);
        assert_eq!(summary.count(Severity::Critical), 0);
        assert_eq!(summary.count(Severity::High), 3);
        assert_eq!(summary.count(Severity::Medium), 0);
        assert_eq!(summary.count(Severity::Low), 9);
        assert_eq!(summary.count(Severity::Info), 0);
    }

    #[test]
    fn grade_parse_is_case_folded() {
        assert_eq!(Grade::parse("b"), Some(Grade::B));
        assert_eq!(Grade::parse(" a "), Some(Grade::A));
        assert_eq!(Grade::parse("f"), Some(Grade::F));
        assert_eq!(Grade::parse("A+"), None);
        assert_eq!(Grade::parse(""), None);
    }

    #[test]
    fn unknown_severity_names_are_dropped() {
        let response: AnalyzeResponse = serde_json::from_str(
            r#"{"findings_by_severity": {"catastrophic": 7, "HIGH": 2}}"#,
        )
        .unwrap();

        let summary = AnalysisSummary::from_response(&response);
        assert_eq!(summary.count(Severity::High), 2);
        assert_eq!(summary.total_issues, 0);
        let total: u64 = Severity::ALL.iter().map(|s| summary.count(*s)).sum();
        assert_eq!(total, 2);
    }
}
