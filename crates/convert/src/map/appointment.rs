//! Appointment record to FHIR Appointment.

use chrono::Duration;

use crate::codes;
use crate::record::AppointmentRecord;
use crate::resource::{AppointmentParticipant, FhirAppointment};
use crate::types::Reference;

/// Minutes assumed when an appointment has no usable duration.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Map an appointment record to a FHIR Appointment resource.
///
/// Both participants are always marked `accepted`: the scheduling tables do
/// not track per-party acceptance, so the export assumes it.
pub fn map_appointment(record: &AppointmentRecord) -> FhirAppointment {
    // A stored duration of 0 means "not set", same as a missing one.
    let minutes = match record.duration_minutes {
        Some(m) if m > 0 => m,
        _ => DEFAULT_DURATION_MINUTES,
    };
    let start = record.scheduled_at;
    let end = start + Duration::minutes(i64::from(minutes));

    FhirAppointment {
        resource_type: "Appointment".to_string(),
        id: record.id.to_string(),
        status: codes::appointment_status(record.status).to_string(),
        start,
        end,
        minutes_duration: minutes,
        participant: vec![
            AppointmentParticipant {
                actor: Reference::new(format!("Patient/{}", record.patient_id)),
                status: "accepted".to_string(),
            },
            AppointmentParticipant {
                actor: Reference::new(format!("Practitioner/{}", record.provider_id)),
                status: "accepted".to_string(),
            },
        ],
    }
}
