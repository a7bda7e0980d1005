//! Vital-sign record to FHIR Observation.

use crate::record::VitalSignRecord;
use crate::resource::{FhirObservation, ObservationComponent};
use crate::types::{CodeableConcept, Coding, Quantity, Reference};

const LOINC: &str = "http://loinc.org";
const UCUM: &str = "http://unitsofmeasure.org";
const CATEGORY_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/observation-category";

/// Map a vital-sign record to a FHIR Observation resource.
///
/// The top-level `code` is always the blood-pressure panel, whichever vitals
/// are actually present; existing consumers depend on that shape.
/// Temperature, respiratory rate, oxygen saturation, and weight are accepted
/// on the record but are not emitted as components.
pub fn map_vital_sign(record: &VitalSignRecord) -> FhirObservation {
    let mut component = Vec::new();

    // Blood pressure only makes sense as a pair.
    if let (Some(systolic), Some(diastolic)) = (record.systolic, record.diastolic) {
        component.push(ObservationComponent {
            code: loinc_concept("8480-6", "Systolic blood pressure"),
            value_quantity: quantity(systolic, "mmHg", "mm[Hg]"),
        });
        component.push(ObservationComponent {
            code: loinc_concept("8462-4", "Diastolic blood pressure"),
            value_quantity: quantity(diastolic, "mmHg", "mm[Hg]"),
        });
    }
    if let Some(heart_rate) = record.heart_rate {
        component.push(ObservationComponent {
            code: loinc_concept("8867-4", "Heart rate"),
            value_quantity: quantity(heart_rate, "beats/minute", "/min"),
        });
    }

    FhirObservation {
        resource_type: "Observation".to_string(),
        id: record.id.to_string(),
        status: "final".to_string(),
        category: vec![CodeableConcept {
            coding: vec![Coding::new(CATEGORY_SYSTEM, "vital-signs", "Vital Signs")],
            text: None,
        }],
        code: loinc_concept("85354-9", "Blood pressure panel with all children optional"),
        subject: Reference::new(format!("Patient/{}", record.patient_id)),
        effective_date_time: record.recorded_at,
        component,
    }
}

fn loinc_concept(code: &str, display: &str) -> CodeableConcept {
    CodeableConcept {
        coding: vec![Coding::new(LOINC, code, display)],
        text: Some(display.to_string()),
    }
}

fn quantity(value: f64, unit: &str, code: &str) -> Quantity {
    Quantity {
        value: Some(value),
        unit: Some(unit.to_string()),
        system: Some(UCUM.to_string()),
        code: Some(code.to_string()),
    }
}
