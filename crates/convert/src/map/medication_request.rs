//! Prescription record to FHIR MedicationRequest.

use crate::codes;
use crate::record::PrescriptionRecord;
use crate::resource::{DispenseRequest, DosageInstruction, DoseAndRate, FhirMedicationRequest};
use crate::types::{CodeableConcept, Quantity, Reference};

const UCUM: &str = "http://unitsofmeasure.org";

/// Supply duration reported on every MedicationRequest. The prescription
/// tables do not track actual supply, so the export uses this documented
/// default.
pub const EXPECTED_SUPPLY_DAYS: f64 = 30.0;

/// Map a prescription record to a FHIR MedicationRequest resource.
pub fn map_prescription(record: &PrescriptionRecord) -> FhirMedicationRequest {
    FhirMedicationRequest {
        resource_type: "MedicationRequest".to_string(),
        id: record.id.to_string(),
        status: codes::prescription_status(record.status).to_string(),
        intent: "order".to_string(),
        medication_codeable_concept: CodeableConcept {
            coding: Vec::new(),
            text: Some(record.medication_name.clone()),
        },
        subject: Reference::new(format!("Patient/{}", record.patient_id)),
        requester: Reference::new(format!("Practitioner/{}", record.provider_id)),
        authored_on: record.prescribed_at,
        dosage_instruction: vec![DosageInstruction {
            text: format!("{} {}", record.dosage, record.frequency),
            dose_and_rate: vec![DoseAndRate {
                dose_quantity: Quantity {
                    value: dose_value(&record.dosage),
                    unit: Some(dose_unit(&record.dosage)),
                    system: None,
                    code: None,
                },
            }],
        }],
        dispense_request: DispenseRequest {
            number_of_repeats_allowed: record.refills,
            quantity: Quantity {
                value: Some(f64::from(record.quantity)),
                unit: None,
                system: None,
                code: None,
            },
            expected_supply_duration: Quantity {
                value: Some(EXPECTED_SUPPLY_DAYS),
                unit: Some("days".to_string()),
                system: Some(UCUM.to_string()),
                code: Some("d".to_string()),
            },
        },
    }
}

/// Numeric prefix of a free-text dose, e.g. `"500mg"` yields `500.0`.
/// An unparseable prefix yields `None` rather than an error.
fn dose_value(dosage: &str) -> Option<f64> {
    let trimmed = dosage.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Unit part of a free-text dose: everything that is not a digit or a
/// period, defaulting to `"mg"` when nothing is left. Surrounding
/// whitespace is also dropped, so `"2.5 ml"` yields `"ml"`, not `" ml"`.
fn dose_unit(dosage: &str) -> String {
    let unit: String = dosage
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect();
    let unit = unit.trim().to_string();
    if unit.is_empty() { "mg".to_string() } else { unit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dose_value_takes_the_numeric_prefix() {
        assert_eq!(dose_value("500mg"), Some(500.0));
        assert_eq!(dose_value("2.5 ml"), Some(2.5));
        assert_eq!(dose_value("one tablet"), None);
    }

    #[test]
    fn dose_unit_strips_digits_and_periods() {
        assert_eq!(dose_unit("500mg"), "mg");
        assert_eq!(dose_unit("2.5 ml"), "ml");
        // Surrounding whitespace never reaches the wire.
        assert_eq!(dose_unit(" 10 mcg "), "mcg");
    }

    #[test]
    fn bare_number_defaults_to_mg() {
        assert_eq!(dose_unit("500"), "mg");
        assert_eq!(dose_value("500"), Some(500.0));
    }
}
