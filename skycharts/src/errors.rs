//! Error types for catalog loading and export

use thiserror::Error;

/// Errors raised while parsing coordinates, loading catalogs or writing output.
///
/// The first three variants are the hard per-record failures. Each one aborts
/// the catalog being loaded and carries the offending text for diagnostics.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Input matched no recognized angle format and is not a plain number
    #[error("Unrecognized coordinate format: {0:?}")]
    InvalidCoordinateFormat(String),

    /// Object type code is missing from the object type table
    #[error("Unknown object type: {0:?}")]
    UnknownObjectType(String),

    /// Constellation abbreviation is missing from the name table
    #[error("Unknown constellation abbreviation: {0:?}")]
    UnknownConstellationAbbreviation(String),

    /// A required column is absent from the catalog header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A row does not have the shape the loader expects
    #[error("Malformed row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
