//! Resource mappers: one pure function per internal entity type.
//!
//! Mappers never validate their input; absent fields propagate as absent
//! output fields and are caught later by [`crate::validate`].

mod appointment;
mod condition;
mod medication_request;
mod observation;
mod patient;

pub use appointment::{DEFAULT_DURATION_MINUTES, map_appointment};
pub use condition::map_diagnosis;
pub use medication_request::{EXPECTED_SUPPLY_DAYS, map_prescription};
pub use observation::map_vital_sign;
pub use patient::{US_CORE_PATIENT_PROFILE, map_patient};
