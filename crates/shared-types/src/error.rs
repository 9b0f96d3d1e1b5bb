use thiserror::Error;

/// Raised when a report payload cannot be built from external input
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Malformed report payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raised when a search query is unusable
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a molecule name.")]
    MissingMolecule,
}
