//! Patient record to FHIR Patient.

use crate::record::{PatientRecord, PatientStatus};
use crate::resource::FhirPatient;
use crate::types::{
    Address, CodeableConcept, Coding, ContactPoint, HumanName, Identifier, Meta, PatientContact,
};

/// US Core profile claimed on every exported Patient.
pub const US_CORE_PATIENT_PROFILE: &str =
    "http://hl7.org/fhir/us/core/StructureDefinition/us-core-patient";

const IDENTIFIER_TYPE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v2-0203";

/// Map a patient record to a FHIR Patient resource.
pub fn map_patient(record: &PatientRecord) -> FhirPatient {
    // The key must exist even with no contact points, so this starts as an
    // empty vec rather than an Option.
    let mut telecom = Vec::new();
    if let Some(phone) = &record.phone {
        telecom.push(ContactPoint::new("phone", phone, "mobile"));
    }
    if let Some(email) = &record.email {
        telecom.push(ContactPoint::new("email", email, "home"));
    }

    let name = match (&record.last_name, &record.first_name) {
        (None, None) => Vec::new(),
        (family, given) => vec![HumanName {
            name_use: Some("official".to_string()),
            family: family.clone(),
            given: given.clone().into_iter().collect(),
            text: None,
        }],
    };

    FhirPatient {
        resource_type: "Patient".to_string(),
        id: record.id.to_string(),
        meta: Meta {
            profile: vec![US_CORE_PATIENT_PROFILE.to_string()],
        },
        identifier: vec![Identifier {
            identifier_type: Some(CodeableConcept {
                coding: vec![Coding::new(IDENTIFIER_TYPE_SYSTEM, "MR", "Medical record number")],
                text: None,
            }),
            system: None,
            value: Some(record.mrn.clone()),
        }],
        active: record.status == PatientStatus::Active,
        name,
        telecom,
        gender: record.gender.as_ref().map(|g| g.to_lowercase()),
        birth_date: record.birth_date.map(|d| d.date_naive()),
        address: record
            .address
            .as_ref()
            .map(|a| Address {
                line: a.line1.clone().into_iter().collect(),
                city: a.city.clone(),
                state: a.state.clone(),
                postal_code: a.postal_code.clone(),
            })
            .into_iter()
            .collect(),
        contact: record
            .emergency_contact
            .as_ref()
            .map(|c| PatientContact {
                relationship: c
                    .relationship
                    .as_ref()
                    .map(|r| CodeableConcept {
                        coding: Vec::new(),
                        text: Some(r.clone()),
                    })
                    .into_iter()
                    .collect(),
                name: Some(HumanName {
                    name_use: None,
                    family: None,
                    given: Vec::new(),
                    text: Some(c.name.clone()),
                }),
                telecom: c
                    .phone
                    .as_ref()
                    .map(|p| ContactPoint::new("phone", p, "mobile"))
                    .into_iter()
                    .collect(),
            })
            .into_iter()
            .collect(),
    }
}
