use crate::api::models::UploadResponse;
use std::path::PathBuf;
use tokio::fs;

/// Metadata of a file the user has offered for checking.
///
/// Exists only for the duration of validation and upload; the client never
/// keeps the document itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    /// Declared media type; often empty, the extension is the primary signal
    pub media_type: String,
}

/// Where the document payload lives until it is uploaded
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Picked through the native dialog; read from disk at upload time
    Path(PathBuf),
    /// Dropped onto the page; the payload arrived with the event
    Bytes(Vec<u8>),
}

/// A candidate document together with its payload source
#[derive(Debug, Clone)]
pub struct LocalDocument {
    pub meta: CandidateFile,
    pub source: DocumentSource,
}

impl LocalDocument {
    pub async fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let metadata = fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            meta: CandidateFile {
                name,
                size: metadata.len(),
                media_type: String::new(),
            },
            source: DocumentSource::Path(path),
        })
    }

    pub fn from_bytes(name: String, media_type: String, bytes: Vec<u8>) -> Self {
        Self {
            meta: CandidateFile {
                name,
                size: bytes.len() as u64,
                media_type,
            },
            source: DocumentSource::Bytes(bytes),
        }
    }

    /// Read the document payload for upload
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            DocumentSource::Path(path) => fs::read(path).await,
            DocumentSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

/// What the service reported about a stored upload. Shown on the Uploaded
/// panel; the session id correlates every later request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSummary {
    pub session_id: String,
    pub filename: String,
    pub file_type: String,
    pub file_size: u64,
}

impl UploadSummary {
    /// Build the summary from the service response, filling gaps from the
    /// local file metadata (the service does not promise the extra fields)
    pub fn from_response(response: &UploadResponse, local: &CandidateFile) -> Self {
        Self {
            session_id: response.session_id.clone(),
            filename: response
                .filename
                .clone()
                .unwrap_or_else(|| local.name.clone()),
            file_type: response.file_type.clone().unwrap_or_default(),
            file_size: response.file_size.unwrap_or(local.size),
        }
    }
}
