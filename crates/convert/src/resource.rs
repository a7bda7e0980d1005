//! FHIR R4 resource shapes produced by the mappers.
//!
//! Field names, casing, and which fields may be absent are part of the wire
//! contract with downstream consumers (EHR integrations, FHIR auditors), so
//! each struct spells out its serialization behavior explicitly. Note that
//! `FhirPatient.telecom` deliberately has no `skip_serializing_if`: consumers
//! expect the key to exist even when there are no contact points.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    Address, CodeableConcept, ContactPoint, HumanName, Identifier, Meta, PatientContact, Quantity,
    Reference,
};

/// FHIR Patient resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirPatient {
    pub resource_type: String,
    pub id: String,
    pub meta: Meta,
    pub identifier: Vec<Identifier>,
    pub active: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    /// Always serialized, even when empty.
    #[serde(default)]
    pub telecom: Vec<ContactPoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Date only, no time component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<PatientContact>,
}

/// FHIR Appointment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirAppointment {
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub minutes_duration: u32,
    pub participant: Vec<AppointmentParticipant>,
}

/// One participant slot on an Appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentParticipant {
    pub actor: Reference,
    pub status: String,
}

/// FHIR Observation resource (vital signs).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirObservation {
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    pub subject: Reference,
    pub effective_date_time: DateTime<Utc>,

    #[serde(default)]
    pub component: Vec<ObservationComponent>,
}

/// One measured component of an Observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    pub code: CodeableConcept,
    pub value_quantity: Quantity,
}

/// FHIR Condition resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirCondition {
    pub resource_type: String,
    pub id: String,
    pub clinical_status: CodeableConcept,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    pub subject: Reference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_date_time: Option<DateTime<Utc>>,

    pub recorded_date: DateTime<Utc>,
}

/// FHIR MedicationRequest resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirMedicationRequest {
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub intent: String,
    pub medication_codeable_concept: CodeableConcept,
    pub subject: Reference,
    pub requester: Reference,
    pub authored_on: DateTime<Utc>,
    pub dosage_instruction: Vec<DosageInstruction>,
    pub dispense_request: DispenseRequest,
}

/// How the medication should be taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosageInstruction {
    pub text: String,
    pub dose_and_rate: Vec<DoseAndRate>,
}

/// Structured dose within a dosage instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseAndRate {
    pub dose_quantity: Quantity,
}

/// Fulfillment authorization for a MedicationRequest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispenseRequest {
    pub number_of_repeats_allowed: u32,
    pub quantity: Quantity,
    pub expected_supply_duration: Quantity,
}
