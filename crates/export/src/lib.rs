//! fhir-export: patient-level FHIR aggregation facade
//!
//! Given a patient id, fetches the patient and all related clinical records
//! from a [`RecordRepository`], maps each through `fhir-convert`, and returns
//! either a single FHIR Patient or a full Bundle.
//!
//! The repository is an opaque upstream collaborator; this crate issues
//! read-only queries against it and performs no writes.

pub mod config;
pub mod error;
pub mod exporter;
pub mod repository;

pub use config::ExportConfig;
pub use error::ExportError;
pub use exporter::PatientExporter;
pub use repository::{RecordRepository, RepositoryError};
