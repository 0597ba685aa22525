use crate::workflow::types::CandidateFile;
use thiserror::Error;

/// Recognized input extensions (matched case-insensitively).
const RECOGNIZED_EXTENSIONS: &[&str] = &[".pptx", ".pdf"];

/// Recognized declared media types.
const RECOGNIZED_MEDIA_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/pdf",
];

/// A candidate file was not an acceptable input type. The user resolves this
/// by re-selecting a different file; it is never a network failure.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported file type: '{0}'. Choose a .pptx or .pdf file.")]
    UnsupportedType(String),
}

/// Decide whether a candidate file is an acceptable input.
///
/// Accepts a file if its name ends with a recognized extension
/// (case-insensitive), OR its declared media type matches a recognized MIME
/// type. The extension is the primary signal because the declared media type
/// is often empty or unreliable for these formats, so the check is an OR, not
/// an AND. No side effects beyond returning the decision.
pub fn validate(file: &CandidateFile) -> Result<(), ValidationError> {
    let name = file.name.to_lowercase();
    let extension_ok = RECOGNIZED_EXTENSIONS
        .iter()
        .any(|extension| name.ends_with(extension));
    let media_type_ok = RECOGNIZED_MEDIA_TYPES
        .iter()
        .any(|media_type| file.media_type == *media_type);

    if extension_ok || media_type_ok {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedType(file.name.clone()))
    }
}
