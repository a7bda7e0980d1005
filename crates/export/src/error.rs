//! Facade error taxonomy.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors surfaced by [`crate::PatientExporter`].
///
/// A missing patient is not represented here; the exporter returns
/// `Ok(None)` for that case so callers can decide whether it is an error.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An upstream fetch failed unexpectedly.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A mapped resource failed structural validation in strict mode.
    #[error("{resource_type}/{id} failed validation: {errors:?}")]
    Validation {
        resource_type: String,
        id: String,
        errors: Vec<String>,
    },

    #[error("failed to serialize mapped resource: {0}")]
    Serialize(#[from] serde_json::Error),
}
