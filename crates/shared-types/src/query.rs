use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Default target geography when none is given
pub const DEFAULT_GEOGRAPHY: &str = "US";

/// A user-triggered innovation search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub molecule: String,
    #[serde(default)]
    pub indication: String,
    #[serde(default = "default_geography")]
    pub geography: String,
}

fn default_geography() -> String {
    DEFAULT_GEOGRAPHY.to_string()
}

impl SearchQuery {
    /// Build a query from raw form input, trimming every field.
    ///
    /// A blank molecule is the only rejected input.
    pub fn new(molecule: &str, indication: &str, geography: &str) -> Result<Self, QueryError> {
        Self {
            molecule: molecule.to_string(),
            indication: indication.to_string(),
            geography: geography.to_string(),
        }
        .normalized()
    }

    /// Trim fields and check the molecule is present
    pub fn normalized(self) -> Result<Self, QueryError> {
        let molecule = self.molecule.trim();
        if molecule.is_empty() {
            return Err(QueryError::MissingMolecule);
        }
        let geography = match self.geography.trim() {
            "" => DEFAULT_GEOGRAPHY,
            geo => geo,
        };
        Ok(Self {
            molecule: molecule.to_string(),
            indication: self.indication.trim().to_string(),
            geography: geography.to_string(),
        })
    }
}
