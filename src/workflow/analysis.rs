use crate::api::AnalysisServiceManager;
use crate::workflow::summary::AnalysisSummary;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis failed: {0}")]
    Service(String),
}

/// Runs the selected rules against an uploaded session and maps the scored
/// result. A single request/response; the Analyzing panel is driven by the
/// caller, not from here.
#[derive(Clone)]
pub struct AnalysisCoordinator {
    service: AnalysisServiceManager,
}

impl AnalysisCoordinator {
    pub fn new(service: AnalysisServiceManager) -> Self {
        Self { service }
    }

    /// A present session id is the caller's responsibility: the workflow
    /// machine only hands one out once the upload stage stored it.
    pub async fn analyze(
        &self,
        session_id: &str,
        rule_ids: Vec<String>,
    ) -> Result<AnalysisSummary, AnalysisError> {
        info!(
            "Requesting analysis for session {} ({} rules)",
            session_id,
            rule_ids.len()
        );

        match self.service.analyze(session_id, rule_ids).await {
            Ok(response) => Ok(AnalysisSummary::from_response(&response)),
            Err(e) => {
                error!("Analysis for session {} failed: {}", session_id, e);
                Err(AnalysisError::Service(e.to_string()))
            }
        }
    }
}
