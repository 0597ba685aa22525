use crate::workflow::summary::AnalysisSummary;
use crate::workflow::types::{CandidateFile, UploadSummary};

/// The one visible stage of the workflow.
///
/// Rendering dispatches on the variant, so visibility is mutually exclusive
/// by construction: an error can never share the screen with a progress or
/// results panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    Uploaded,
    Analyzing,
    Results,
    Error,
}

/// Client workflow state machine.
///
/// Owns all cross-stage state: the visible panel, the current file, the
/// session handed out by the upload stage, and the last result. Every
/// transition goes through a method here; the UI layer never writes these
/// fields directly, so the ordering rules of the workflow hold in one place.
#[derive(Debug, Default)]
pub struct WorkflowMachine {
    panel: Panel,
    file: Option<CandidateFile>,
    upload: Option<UploadSummary>,
    summary: Option<AnalysisSummary>,
    error: Option<String>,
}

impl WorkflowMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn file(&self) -> Option<&CandidateFile> {
        self.file.as_ref()
    }

    pub fn upload(&self) -> Option<&UploadSummary> {
        self.upload.as_ref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.upload.as_ref().map(|upload| upload.session_id.as_str())
    }

    pub fn summary(&self) -> Option<&AnalysisSummary> {
        self.summary.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn in_flight(&self) -> bool {
        matches!(self.panel, Panel::Uploading | Panel::Analyzing)
    }

    /// A validated file was chosen. Allowed whenever no transfer is in
    /// flight; choosing a new file from the error panel starts a fresh
    /// attempt. Returns false when the selection was ignored.
    pub fn file_selected(&mut self, file: CandidateFile) -> bool {
        if self.in_flight() {
            return false;
        }

        self.file = Some(file);
        self.upload = None;
        self.summary = None;
        self.error = None;
        self.panel = Panel::FileSelected;
        true
    }

    /// Validation rejected the candidate; the error panel stays interactive
    /// so the user can pick a different file
    pub fn validation_failed(&mut self, message: String) {
        if self.in_flight() {
            return;
        }

        self.file = None;
        self.fail(message);
    }

    /// FileSelected -> Uploading. Returns false (no-op) from any other panel,
    /// which is what keeps a second upload from starting mid-transfer.
    pub fn upload_started(&mut self) -> bool {
        if self.panel != Panel::FileSelected {
            return false;
        }

        self.panel = Panel::Uploading;
        true
    }

    /// Store the session and show the upload summary. A completion that lands
    /// after a restart is stale and ignored.
    pub fn upload_succeeded(&mut self, upload: UploadSummary) {
        if self.panel != Panel::Uploading {
            return;
        }

        self.upload = Some(upload);
        self.panel = Panel::Uploaded;
    }

    pub fn upload_failed(&mut self, message: String) {
        if self.panel != Panel::Uploading {
            return;
        }

        self.fail(message);
    }

    /// Uploaded -> Analyzing. Returns the session to target, or None when
    /// analysis is not available (a no-op, never a crash): the session id
    /// only exists once the upload stage stored it.
    pub fn analysis_started(&mut self) -> Option<String> {
        if self.panel != Panel::Uploaded {
            return None;
        }

        let session_id = self.session_id()?.to_string();
        self.panel = Panel::Analyzing;
        Some(session_id)
    }

    pub fn analysis_succeeded(&mut self, summary: AnalysisSummary) {
        if self.panel != Panel::Analyzing {
            return;
        }

        self.summary = Some(summary);
        self.panel = Panel::Results;
    }

    /// The session is kept on analysis failure: the service still holds the
    /// upload, even though the current flow routes the user back to file
    /// selection.
    pub fn analysis_failed(&mut self, message: String) {
        if self.panel != Panel::Analyzing {
            return;
        }

        self.summary = None;
        self.fail(message);
    }

    /// Start over from any state: discard the session and every transient
    /// result. Returns the discarded session id so the caller can ask the
    /// service to clean up.
    pub fn reset(&mut self) -> Option<String> {
        let discarded = self.upload.take().map(|upload| upload.session_id);
        self.file = None;
        self.summary = None;
        self.error = None;
        self.panel = Panel::Idle;
        discarded
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.panel = Panel::Error;
    }
}
