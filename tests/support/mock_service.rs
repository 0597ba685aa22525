use acheck::api::models::{AnalyzeResponse, RuleInfo, UploadResponse};
use acheck::api::{AnalysisService, ServiceError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted stand-in for the remote analysis service.
///
/// Each endpoint consumes its scripted response once and records what it was
/// called with; an unscripted call is a test bug and panics.
#[derive(Default)]
pub struct MockAnalysisService {
    upload_response: Mutex<Option<Result<UploadResponse, ServiceError>>>,
    analyze_response: Mutex<Option<Result<AnalyzeResponse, ServiceError>>>,
    pub uploaded_filenames: Mutex<Vec<String>>,
    pub analyzed_sessions: Mutex<Vec<String>>,
    pub analyzed_rules: Mutex<Vec<Vec<String>>>,
    pub deleted_sessions: Mutex<Vec<String>>,
}

impl MockAnalysisService {
    pub fn upload_ok(session_id: &str) -> Self {
        let mock = Self::default();
        *mock.upload_response.lock().unwrap() = Some(Ok(UploadResponse {
            session_id: session_id.to_string(),
            filename: None,
            file_type: Some("pptx".to_string()),
            file_size: None,
            status: Some("uploaded".to_string()),
        }));
        mock
    }

    pub fn upload_err(message: &str) -> Self {
        let mock = Self::default();
        *mock.upload_response.lock().unwrap() =
            Some(Err(ServiceError::Service(message.to_string())));
        mock
    }

    pub fn with_analysis(self, response: AnalyzeResponse) -> Self {
        *self.analyze_response.lock().unwrap() = Some(Ok(response));
        self
    }

    pub fn with_analysis_error(self, message: &str) -> Self {
        *self.analyze_response.lock().unwrap() =
            Some(Err(ServiceError::Service(message.to_string())));
        self
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn upload(
        &self,
        filename: &str,
        _content: Vec<u8>,
    ) -> Result<UploadResponse, ServiceError> {
        self.uploaded_filenames
            .lock()
            .unwrap()
            .push(filename.to_string());
        self.upload_response
            .lock()
            .unwrap()
            .take()
            .expect("unexpected upload call")
    }

    async fn analyze(
        &self,
        session_id: &str,
        enabled_rules: Vec<String>,
    ) -> Result<AnalyzeResponse, ServiceError> {
        self.analyzed_sessions
            .lock()
            .unwrap()
            .push(session_id.to_string());
        self.analyzed_rules.lock().unwrap().push(enabled_rules);
        self.analyze_response
            .lock()
            .unwrap()
            .take()
            .expect("unexpected analyze call")
    }

    async fn available_rules(&self) -> Result<Vec<RuleInfo>, ServiceError> {
        Ok(Vec::new())
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ServiceError> {
        self.deleted_sessions
            .lock()
            .unwrap()
            .push(session_id.to_string());
        Ok(())
    }
}
