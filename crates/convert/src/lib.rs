//! fhir-convert: clinical records to FHIR R4 resources
//!
//! This crate is the pure conversion core: it maps the platform's internal
//! relational records (patients, appointments, vital signs, diagnoses,
//! prescriptions) into FHIR-shaped resources, assembles them into a Bundle,
//! and structurally validates candidate resources.
//!
//! Every mapping function is a pure function of its input record; nothing in
//! this crate performs I/O or holds state between calls.

pub mod bundle;
pub mod codes;
pub mod map;
pub mod record;
pub mod resource;
pub mod types;
pub mod validate;

pub use bundle::{Bundle, BundleEntry, BundleType};
pub use map::{map_appointment, map_diagnosis, map_patient, map_prescription, map_vital_sign};
pub use record::{
    AppointmentRecord, AppointmentStatus, DiagnosisRecord, PatientRecord, PatientStatus,
    PrescriptionRecord, PrescriptionStatus, VitalSignRecord,
};
pub use resource::{
    FhirAppointment, FhirCondition, FhirMedicationRequest, FhirObservation, FhirPatient,
};
pub use validate::{ValidationReport, validate_resource};
