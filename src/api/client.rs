use crate::api::models::{
    failure_message, AnalyzeRequest, AnalyzeResponse, RuleInfo, RulesResponse, UploadResponse,
};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, Response};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("{0}")]
    Service(String),
}

/// Trait for the remote analysis service (allows mocking for tests)
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Upload a document, creating a session on the service
    async fn upload(&self, filename: &str, content: Vec<u8>)
        -> Result<UploadResponse, ServiceError>;

    /// Run the selected rules against an uploaded session
    async fn analyze(
        &self,
        session_id: &str,
        enabled_rules: Vec<String>,
    ) -> Result<AnalyzeResponse, ServiceError>;

    /// List the rules the service can run
    async fn available_rules(&self) -> Result<Vec<RuleInfo>, ServiceError>;

    /// Discard a session and its stored upload
    async fn delete_session(&self, session_id: &str) -> Result<(), ServiceError>;
}

/// Production HTTP implementation backed by the checker service's REST API
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
}

impl HttpAnalysisService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Map a non-success response to a display-message error
    async fn service_error(response: Response) -> ServiceError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ServiceError::Service(failure_message(status, &body))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<UploadResponse, ServiceError> {
        let url = format!("{}/api/upload", self.base_url);
        debug!("POST {} ({} bytes)", url, content.len());

        let part = reqwest::multipart::Part::bytes(content).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(response.json::<UploadResponse>().await?)
    }

    async fn analyze(
        &self,
        session_id: &str,
        enabled_rules: Vec<String>,
    ) -> Result<AnalyzeResponse, ServiceError> {
        let url = format!("{}/api/analysis/{}/analyze", self.base_url, session_id);
        debug!("POST {} ({} rules)", url, enabled_rules.len());

        let request = AnalyzeRequest {
            enabled_rules,
            config: serde_json::json!({}),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(response.json::<AnalyzeResponse>().await?)
    }

    async fn available_rules(&self) -> Result<Vec<RuleInfo>, ServiceError> {
        let url = format!("{}/api/analysis/rules", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let rules = response.json::<RulesResponse>().await?;
        let mut rules: Vec<RuleInfo> = rules.rules.into_values().collect();
        rules.sort_by(|a, b| a.rule_id.cmp(&b.rule_id));
        Ok(rules)
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ServiceError> {
        let url = format!("{}/api/session/{}", self.base_url, session_id);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        Ok(())
    }
}

/// Clone-able handle to the analysis service used by the workflow coordinators
#[derive(Clone)]
pub struct AnalysisServiceManager {
    service: Arc<dyn AnalysisService>,
}

impl std::fmt::Debug for AnalysisServiceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisServiceManager")
            .field("service", &"<dyn AnalysisService>")
            .finish()
    }
}

impl AnalysisServiceManager {
    /// Production manager talking to the configured service URL
    pub fn from_config(config: &Config) -> Self {
        Self::with_service(Arc::new(HttpAnalysisService::new(config.api_base_url.clone())))
    }

    /// Wrap any service implementation, real or scripted
    pub fn with_service(service: Arc<dyn AnalysisService>) -> Self {
        Self { service }
    }

    pub async fn upload(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<UploadResponse, ServiceError> {
        self.service.upload(filename, content).await
    }

    pub async fn analyze(
        &self,
        session_id: &str,
        enabled_rules: Vec<String>,
    ) -> Result<AnalyzeResponse, ServiceError> {
        self.service.analyze(session_id, enabled_rules).await
    }

    pub async fn available_rules(&self) -> Result<Vec<RuleInfo>, ServiceError> {
        self.service.available_rules().await
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), ServiceError> {
        self.service.delete_session(session_id).await
    }
}
