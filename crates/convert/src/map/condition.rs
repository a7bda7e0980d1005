//! Diagnosis record to FHIR Condition.

use crate::record::DiagnosisRecord;
use crate::resource::FhirCondition;
use crate::types::{CodeableConcept, Coding, Reference};

const CLINICAL_STATUS_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/condition-clinical";
const ICD_10_CM: &str = "http://hl7.org/fhir/sid/icd-10-cm";

/// Map a diagnosis record to a FHIR Condition resource.
pub fn map_diagnosis(record: &DiagnosisRecord) -> FhirCondition {
    let clinical_code = record.status.clone().unwrap_or_else(|| "active".to_string());

    FhirCondition {
        resource_type: "Condition".to_string(),
        id: record.id.to_string(),
        clinical_status: CodeableConcept {
            coding: vec![Coding {
                system: Some(CLINICAL_STATUS_SYSTEM.to_string()),
                code: Some(clinical_code),
                display: None,
            }],
            text: None,
        },
        // Only coded diagnoses carry a `code`; the human-readable name rides
        // along as its text.
        code: record.icd10_code.as_ref().map(|icd| CodeableConcept {
            coding: vec![Coding {
                system: Some(ICD_10_CM.to_string()),
                code: Some(icd.clone()),
                display: None,
            }],
            text: Some(record.name.clone()),
        }),
        subject: Reference::new(format!("Patient/{}", record.patient_id)),
        onset_date_time: record.diagnosed_at,
        recorded_date: record.created_at,
    }
}
