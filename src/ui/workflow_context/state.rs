use crate::api::AnalysisServiceManager;
use crate::workflow::analysis::AnalysisCoordinator;
use crate::workflow::machine::{Panel, WorkflowMachine};
use crate::workflow::summary::AnalysisSummary;
use crate::workflow::types::{CandidateFile, LocalDocument, UploadSummary};
use crate::workflow::upload::UploadCoordinator;
use dioxus::prelude::*;
use std::path::PathBuf;
use tracing::warn;

use super::rules::RuleToggle;
use super::{analysis, rules, upload};

/// UI half of the workflow controller.
///
/// Wraps the state machine in a signal and carries the UI-only state around
/// it (simulated progress value, rule toggles, findings-stub flag). All
/// transitions still go through the machine; components call the facade
/// methods below and render from the getters.
pub struct WorkflowContext {
    pub(crate) machine: Signal<WorkflowMachine>,
    pub(crate) upload_percent: Signal<u8>,
    pub(crate) rules: Signal<Vec<RuleToggle>>,
    pub(crate) findings_acknowledged: Signal<bool>,
    pub(crate) uploader: UploadCoordinator,
    pub(crate) analyzer: AnalysisCoordinator,
    pub(crate) service: AnalysisServiceManager,
}

impl WorkflowContext {
    pub fn new(service: AnalysisServiceManager) -> Self {
        Self {
            machine: Signal::new(WorkflowMachine::new()),
            upload_percent: Signal::new(0),
            rules: Signal::new(rules::builtin_rules()),
            findings_acknowledged: Signal::new(false),
            uploader: UploadCoordinator::new(service.clone()),
            analyzer: AnalysisCoordinator::new(service.clone()),
            service,
        }
    }

    // Getters - reading inside a component subscribes it to updates

    pub fn panel(&self) -> Panel {
        self.machine.read().panel()
    }

    pub fn file(&self) -> Option<CandidateFile> {
        self.machine.read().file().cloned()
    }

    pub fn upload(&self) -> Option<UploadSummary> {
        self.machine.read().upload().cloned()
    }

    pub fn summary(&self) -> Option<AnalysisSummary> {
        self.machine.read().summary().cloned()
    }

    pub fn error_message(&self) -> Option<String> {
        self.machine.read().error().map(str::to_string)
    }

    pub fn upload_percent(&self) -> Signal<u8> {
        self.upload_percent
    }

    pub fn rules(&self) -> Signal<Vec<RuleToggle>> {
        self.rules
    }

    pub fn findings_acknowledged(&self) -> Signal<bool> {
        self.findings_acknowledged
    }

    pub fn set_upload_percent(&self, value: u8) {
        let mut signal = self.upload_percent;
        signal.set(value);
    }

    /// Fresh read of the enabled rule ids at call time; never cached between
    /// analysis attempts. An empty set is valid and passed through as-is.
    pub fn selected_rule_ids(&self) -> Vec<String> {
        rules::selected_rule_ids(self)
    }

    pub fn toggle_rule(&self, rule_id: &str) {
        rules::toggle(self, rule_id);
    }

    /// The "view detailed findings" control is a stub: its real contract is
    /// still owned by the service side, so the request is only acknowledged.
    pub fn acknowledge_findings_request(&self) {
        let mut signal = self.findings_acknowledged;
        signal.set(true);
    }

    // Facade methods delegating to submodules

    pub async fn select_path(&self, path: PathBuf) -> Result<(), String> {
        upload::select_path(self, path).await
    }

    pub async fn select_document(&self, document: LocalDocument) -> Result<(), String> {
        upload::select_document(self, document).await
    }

    pub async fn run_analysis(&self) -> Result<(), String> {
        analysis::run_analysis(self).await
    }

    pub async fn refresh_rules(&self) {
        rules::refresh_rules(self).await;
    }

    /// Start over: back to Idle, session discarded. The service-side session
    /// delete is best-effort and never blocks the UI.
    pub fn restart(&self) {
        let mut machine = self.machine;
        let discarded = machine.write().reset();

        self.set_upload_percent(0);
        let mut acknowledged = self.findings_acknowledged;
        acknowledged.set(false);

        if let Some(session_id) = discarded {
            let service = self.service.clone();
            spawn(async move {
                if let Err(e) = service.delete_session(&session_id).await {
                    warn!("Could not delete session {}: {}", session_id, e);
                }
            });
        }
    }
}
