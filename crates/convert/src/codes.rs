//! Translation tables from internal status enums to FHIR status codes.
//!
//! Each table is an exhaustive match, so adding a new internal status is a
//! compile-checked one-line change. The `Unknown` arm is the explicit
//! fallback for values the application did not recognize at parse time; it
//! logs a warning instead of producing an undefined code.

use crate::record::{AppointmentStatus, PrescriptionStatus};

/// FHIR `appointmentstatus` code used for unrecognized internal values.
pub const APPOINTMENT_STATUS_FALLBACK: &str = "pending";

/// FHIR `medicationrequest-status` code used for unrecognized internal values.
pub const PRESCRIPTION_STATUS_FALLBACK: &str = "stopped";

/// Translate an internal appointment status to a FHIR `appointmentstatus` code.
pub fn appointment_status(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "booked",
        AppointmentStatus::Confirmed => "booked",
        AppointmentStatus::CheckedIn => "checked-in",
        AppointmentStatus::InProgress => "arrived",
        AppointmentStatus::Completed => "fulfilled",
        AppointmentStatus::Cancelled => "cancelled",
        AppointmentStatus::NoShow => "noshow",
        AppointmentStatus::Unknown => {
            tracing::warn!(
                fallback = APPOINTMENT_STATUS_FALLBACK,
                "unrecognized appointment status, using fallback code"
            );
            APPOINTMENT_STATUS_FALLBACK
        }
    }
}

/// Translate an internal prescription status to a FHIR `medicationrequest-status` code.
pub fn prescription_status(status: PrescriptionStatus) -> &'static str {
    match status {
        PrescriptionStatus::Active => "active",
        PrescriptionStatus::Completed => "completed",
        PrescriptionStatus::OnHold => "on-hold",
        PrescriptionStatus::Discontinued => "stopped",
        PrescriptionStatus::Unknown => {
            tracing::warn!(
                fallback = PRESCRIPTION_STATUS_FALLBACK,
                "unrecognized prescription status, using fallback code"
            );
            PRESCRIPTION_STATUS_FALLBACK
        }
    }
}
