//! The upstream record repository contract.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use fhir_convert::record::{
    AppointmentRecord, DiagnosisRecord, PatientRecord, PrescriptionRecord, VitalSignRecord,
};

/// Unexpected upstream failures. "Patient not found" is not an error: the
/// `patient` fetch returns `Ok(None)` so the two cases stay distinguishable.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

/// Read-only access to the internal clinical record store.
///
/// All methods are keyed by patient id. The related-record fetches are
/// independent of each other; the exporter issues them as one concurrent
/// batch.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn patient(&self, id: Uuid) -> Result<Option<PatientRecord>, RepositoryError>;

    async fn appointments(&self, patient_id: Uuid)
    -> Result<Vec<AppointmentRecord>, RepositoryError>;

    async fn vital_signs(&self, patient_id: Uuid)
    -> Result<Vec<VitalSignRecord>, RepositoryError>;

    async fn diagnoses(&self, patient_id: Uuid) -> Result<Vec<DiagnosisRecord>, RepositoryError>;

    async fn prescriptions(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError>;
}
