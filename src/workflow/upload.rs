use crate::api::AnalysisServiceManager;
use crate::workflow::progress::SimulatedProgress;
use crate::workflow::types::{LocalDocument, UploadSummary};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Upload failed: could not read '{name}'")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Upload failed: {0}")]
    Service(String),
}

/// Uploads one validated document and correlates the resulting session.
///
/// The simulated progress indicator runs only while the request is in
/// flight: started before the call, completed (snapped to 100) once the call
/// settles, on the success and failure paths alike. There is no retry; the
/// user re-attempts by selecting a file again.
#[derive(Clone)]
pub struct UploadCoordinator {
    service: AnalysisServiceManager,
}

impl UploadCoordinator {
    pub fn new(service: AnalysisServiceManager) -> Self {
        Self { service }
    }

    pub async fn upload(
        &self,
        document: &LocalDocument,
        progress_tx: mpsc::UnboundedSender<u8>,
    ) -> Result<UploadSummary, UploadError> {
        let content = match document.read().await {
            Ok(content) => content,
            Err(source) => {
                return Err(UploadError::Read {
                    name: document.meta.name.clone(),
                    source,
                })
            }
        };

        info!(
            "Uploading '{}' ({} bytes)",
            document.meta.name, document.meta.size
        );

        let progress = SimulatedProgress::begin(progress_tx);
        let result = self.service.upload(&document.meta.name, content).await;
        progress.complete();

        match result {
            Ok(response) => {
                info!("Upload stored as session {}", response.session_id);
                Ok(UploadSummary::from_response(&response, &document.meta))
            }
            Err(e) => {
                error!("Upload of '{}' failed: {}", document.meta.name, e);
                Err(UploadError::Service(e.to_string()))
            }
        }
    }
}
