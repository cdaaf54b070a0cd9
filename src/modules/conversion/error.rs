#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("MediaConvert request failed: {0}")]
    Remote(#[from] aws_sdk_mediaconvert::Error),

    #[error("MediaConvert returned no job in the {0} response")]
    EmptyResponse(&'static str),

    #[error("Failed to load job settings template {path}: {reason}")]
    Template { path: String, reason: String },
}
