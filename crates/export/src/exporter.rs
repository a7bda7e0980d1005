//! Patient export facade: fetch, map, validate, bundle.

use serde_json::Value as JsonValue;
use uuid::Uuid;

use fhir_convert::{
    Bundle, FhirPatient, map_appointment, map_diagnosis, map_patient, map_prescription,
    map_vital_sign, validate_resource,
};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::repository::RecordRepository;

/// Orchestrates a patient's FHIR export against a record repository.
///
/// The per-entity fetches are independent reads against the same patient id
/// and are issued as one concurrent batch. If any fetch fails, the first
/// failure propagates and no bundle is produced.
pub struct PatientExporter<R> {
    repo: R,
    config: ExportConfig,
}

impl<R: RecordRepository> PatientExporter<R> {
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, ExportConfig::default())
    }

    pub fn with_config(repo: R, config: ExportConfig) -> Self {
        Self { repo, config }
    }

    /// Export a single FHIR Patient resource.
    ///
    /// Returns `Ok(None)` when the patient does not exist.
    pub async fn patient_fhir(&self, id: Uuid) -> Result<Option<FhirPatient>, ExportError> {
        let record = self.repo.patient(id).await?;
        Ok(record.map(|r| map_patient(&r)))
    }

    /// Export the patient's full FHIR Bundle: the Patient resource followed
    /// by its Appointments, Observations, Conditions, and MedicationRequests.
    ///
    /// Returns `Ok(None)` when the patient does not exist.
    pub async fn patient_bundle_fhir(&self, id: Uuid) -> Result<Option<Bundle>, ExportError> {
        let (patient, appointments, vitals, diagnoses, prescriptions) = tokio::try_join!(
            self.repo.patient(id),
            self.repo.appointments(id),
            self.repo.vital_signs(id),
            self.repo.diagnoses(id),
            self.repo.prescriptions(id),
        )?;

        let Some(patient) = patient else {
            tracing::debug!(patient_id = %id, "patient not found, no bundle produced");
            return Ok(None);
        };

        let mut resources = Vec::with_capacity(
            1 + appointments.len() + vitals.len() + diagnoses.len() + prescriptions.len(),
        );
        resources.push(serde_json::to_value(map_patient(&patient))?);
        for appointment in &appointments {
            resources.push(serde_json::to_value(map_appointment(appointment))?);
        }
        for vital in &vitals {
            resources.push(serde_json::to_value(map_vital_sign(vital))?);
        }
        for diagnosis in &diagnoses {
            resources.push(serde_json::to_value(map_diagnosis(diagnosis))?);
        }
        for prescription in &prescriptions {
            resources.push(serde_json::to_value(map_prescription(prescription))?);
        }

        if self.config.validate {
            self.check(&resources)?;
        }

        tracing::debug!(patient_id = %id, resources = resources.len(), "assembled patient bundle");
        Ok(Some(Bundle::assemble(resources, self.config.bundle_type)))
    }

    /// Validate each mapped resource. In strict mode the first invalid
    /// resource aborts the export; otherwise it is logged and kept.
    fn check(&self, resources: &[JsonValue]) -> Result<(), ExportError> {
        for resource in resources {
            let report = validate_resource(resource);
            if report.valid {
                continue;
            }

            let resource_type = resource
                .get("resourceType")
                .and_then(JsonValue::as_str)
                .unwrap_or("unknown")
                .to_string();
            let id = resource
                .get("id")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string();

            if self.config.strict {
                return Err(ExportError::Validation {
                    resource_type,
                    id,
                    errors: report.errors,
                });
            }
            tracing::warn!(
                resource_type = %resource_type,
                id = %id,
                errors = ?report.errors,
                "including resource that failed structural validation"
            );
        }
        Ok(())
    }
}
