use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExoError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV catalog decoding error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON catalog decoding error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid catalog layout: {0}")]
    InvalidCatalogLayout(String),

    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParameter(String),

    #[error("Invalid similarity parameter: {0}")]
    InvalidSimilarityParameter(String),

    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),
}

impl PartialEq for ExoError {
    fn eq(&self, other: &Self) -> bool {
        use ExoError::*;
        match (self, other) {
            // Wrapped errors are not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (InvalidCatalogLayout(a), InvalidCatalogLayout(b)) => a == b,
            (InvalidFilterParameter(a), InvalidFilterParameter(b)) => a == b,
            (InvalidSimilarityParameter(a), InvalidSimilarityParameter(b)) => a == b,
            (UnknownPlanet(a), UnknownPlanet(b)) => a == b,

            _ => false,
        }
    }
}
