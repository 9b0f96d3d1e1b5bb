use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to encode page content: {0}")]
    ContentError(String),

    #[error("PDF operation failed: {0}")]
    OperationError(String),
}
