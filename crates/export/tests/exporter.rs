//! Facade tests against an in-memory record repository.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use fhir_convert::record::{
    AppointmentRecord, AppointmentStatus, DiagnosisRecord, PatientRecord, PatientStatus,
    PrescriptionRecord, VitalSignRecord,
};
use fhir_export::{ExportConfig, ExportError, PatientExporter, RecordRepository, RepositoryError};

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn patient_record(id: Uuid) -> PatientRecord {
    PatientRecord {
        id,
        mrn: "MRN-7".to_string(),
        first_name: Some("Grace".to_string()),
        last_name: Some("Hopper".to_string()),
        gender: Some("Female".to_string()),
        birth_date: Some(ts(1906, 12, 9, 0, 0)),
        phone: None,
        email: None,
        address: None,
        emergency_contact: None,
        status: PatientStatus::Active,
    }
}

fn appointment_record(patient_id: Uuid) -> AppointmentRecord {
    AppointmentRecord {
        id: Uuid::new_v4(),
        patient_id,
        provider_id: Uuid::new_v4(),
        scheduled_at: ts(2024, 6, 3, 10, 0),
        duration_minutes: Some(20),
        status: AppointmentStatus::Confirmed,
        appointment_type: None,
        reason: None,
    }
}

fn vital_sign_record(patient_id: Uuid) -> VitalSignRecord {
    VitalSignRecord {
        id: Uuid::new_v4(),
        patient_id,
        recorded_at: ts(2024, 6, 3, 10, 5),
        systolic: Some(118.0),
        diastolic: Some(76.0),
        heart_rate: None,
        temperature: None,
        respiratory_rate: None,
        oxygen_saturation: None,
        weight: None,
    }
}

fn diagnosis_record(patient_id: Uuid) -> DiagnosisRecord {
    DiagnosisRecord {
        id: Uuid::new_v4(),
        patient_id,
        name: "Seasonal allergies".to_string(),
        icd10_code: None,
        status: Some("active".to_string()),
        diagnosed_at: None,
        created_at: ts(2024, 6, 3, 10, 10),
    }
}

/// In-memory repository; `fail_appointments` simulates one sub-fetch going
/// down while the rest succeed.
#[derive(Default)]
struct InMemoryRepo {
    patient: Option<PatientRecord>,
    appointments: Vec<AppointmentRecord>,
    vitals: Vec<VitalSignRecord>,
    diagnoses: Vec<DiagnosisRecord>,
    prescriptions: Vec<PrescriptionRecord>,
    fail_appointments: bool,
}

#[async_trait]
impl RecordRepository for InMemoryRepo {
    async fn patient(&self, id: Uuid) -> Result<Option<PatientRecord>, RepositoryError> {
        Ok(self.patient.clone().filter(|p| p.id == id))
    }

    async fn appointments(
        &self,
        _patient_id: Uuid,
    ) -> Result<Vec<AppointmentRecord>, RepositoryError> {
        if self.fail_appointments {
            return Err(RepositoryError::Unavailable("appointments shard down".into()));
        }
        Ok(self.appointments.clone())
    }

    async fn vital_signs(
        &self,
        _patient_id: Uuid,
    ) -> Result<Vec<VitalSignRecord>, RepositoryError> {
        Ok(self.vitals.clone())
    }

    async fn diagnoses(&self, _patient_id: Uuid) -> Result<Vec<DiagnosisRecord>, RepositoryError> {
        Ok(self.diagnoses.clone())
    }

    async fn prescriptions(
        &self,
        _patient_id: Uuid,
    ) -> Result<Vec<PrescriptionRecord>, RepositoryError> {
        Ok(self.prescriptions.clone())
    }
}

#[tokio::test]
async fn full_bundle_round_trip() {
    let patient_id = Uuid::new_v4();
    let repo = InMemoryRepo {
        patient: Some(patient_record(patient_id)),
        appointments: vec![appointment_record(patient_id), appointment_record(patient_id)],
        vitals: vec![vital_sign_record(patient_id)],
        diagnoses: vec![diagnosis_record(patient_id)],
        ..Default::default()
    };
    let exporter = PatientExporter::new(repo);

    let bundle = exporter
        .patient_bundle_fhir(patient_id)
        .await
        .unwrap()
        .expect("patient exists");

    // 1 Patient + 2 Appointments + 1 Observation + 1 Condition; absent
    // prescriptions contribute nothing.
    assert_eq!(bundle.total, 5);
    assert_eq!(bundle.entry.len(), 5);

    let types: Vec<&str> = bundle
        .entry
        .iter()
        .map(|e| e.resource["resourceType"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        ["Patient", "Appointment", "Appointment", "Observation", "Condition"]
    );
    assert_eq!(
        bundle.entry[0].full_url,
        format!("urn:uuid:{patient_id}")
    );

    let value = serde_json::to_value(&bundle).unwrap();
    assert_eq!(value["resourceType"], "Bundle");
    assert_eq!(value["type"], "collection");
}

#[tokio::test]
async fn missing_patient_yields_none_not_an_error() {
    let exporter = PatientExporter::new(InMemoryRepo::default());
    let id = Uuid::new_v4();

    assert!(exporter.patient_fhir(id).await.unwrap().is_none());
    assert!(exporter.patient_bundle_fhir(id).await.unwrap().is_none());
}

#[tokio::test]
async fn patient_fhir_maps_the_found_record() {
    let patient_id = Uuid::new_v4();
    let repo = InMemoryRepo {
        patient: Some(patient_record(patient_id)),
        ..Default::default()
    };
    let exporter = PatientExporter::new(repo);

    let patient = exporter
        .patient_fhir(patient_id)
        .await
        .unwrap()
        .expect("patient exists");
    assert_eq!(patient.id, patient_id.to_string());
    assert!(patient.active);
    // No phone and no email still means a present, empty telecom list.
    assert!(patient.telecom.is_empty());
}

#[tokio::test]
async fn sub_fetch_failure_propagates() {
    let patient_id = Uuid::new_v4();
    let repo = InMemoryRepo {
        patient: Some(patient_record(patient_id)),
        fail_appointments: true,
        ..Default::default()
    };
    let exporter = PatientExporter::new(repo);

    let err = exporter.patient_bundle_fhir(patient_id).await.unwrap_err();
    assert!(matches!(err, ExportError::Repository(_)));
}

#[tokio::test]
async fn strict_mode_rejects_an_invalid_resource() {
    let patient_id = Uuid::new_v4();
    let mut record = patient_record(patient_id);
    record.first_name = None;
    record.last_name = None;

    let repo = InMemoryRepo {
        patient: Some(record),
        ..Default::default()
    };
    let config = ExportConfig {
        strict: true,
        ..Default::default()
    };
    let exporter = PatientExporter::with_config(repo, config);

    let err = exporter.patient_bundle_fhir(patient_id).await.unwrap_err();
    match err {
        ExportError::Validation { resource_type, errors, .. } => {
            assert_eq!(resource_type, "Patient");
            assert!(errors.iter().any(|e| e.contains("name")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn default_mode_keeps_invalid_resources_in_the_bundle() {
    let patient_id = Uuid::new_v4();
    let mut record = patient_record(patient_id);
    record.first_name = None;
    record.last_name = None;

    let repo = InMemoryRepo {
        patient: Some(record),
        ..Default::default()
    };
    let exporter = PatientExporter::new(repo);

    let bundle = exporter
        .patient_bundle_fhir(patient_id)
        .await
        .unwrap()
        .expect("patient exists");
    assert_eq!(bundle.total, 1);
}
