use thiserror::Error;

/// Errors produced while building an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A record failed to serialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV export needs records that serialize to JSON objects.
    #[error("Records must serialize to JSON objects")]
    NotTabular,
}

pub type Result<T> = std::result::Result<T, ExportError>;
