pub mod analysis;
pub mod machine;
pub mod progress;
pub mod summary;
pub mod types;
pub mod upload;
pub mod validate;

pub use analysis::{AnalysisCoordinator, AnalysisError};
pub use machine::{Panel, WorkflowMachine};
pub use summary::{AnalysisSummary, Grade, Severity};
pub use types::{CandidateFile, DocumentSource, LocalDocument, UploadSummary};
pub use upload::{UploadCoordinator, UploadError};
pub use validate::{validate, ValidationError};
