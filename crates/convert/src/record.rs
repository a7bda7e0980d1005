//! Internal clinical records as handed back by the record repository.
//!
//! These are read-only inputs to the mappers. The status enums parse
//! leniently: a value the application does not recognize becomes `Unknown`
//! and is resolved through the translation-table fallback (see
//! [`crate::codes`]) instead of failing deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Patient demographics row.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientRecord {
    pub id: Uuid,
    /// Facility-assigned medical record number.
    pub mrn: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<PostalAddress>,
    pub emergency_contact: Option<EmergencyContact>,
    pub status: PatientStatus,
}

/// Structured mailing address on a patient row.
#[derive(Debug, Clone, Deserialize)]
pub struct PostalAddress {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// Emergency contact attached to a patient row.
#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: Option<String>,
    pub phone: Option<String>,
}

/// Scheduled appointment row.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    /// Length in minutes. `None` and `0` both mean "not set".
    pub duration_minutes: Option<u32>,
    pub status: AppointmentStatus,
    pub appointment_type: Option<String>,
    pub reason: Option<String>,
}

/// One vitals measurement row. Any subset of the measurements may be set.
#[derive(Debug, Clone, Deserialize)]
pub struct VitalSignRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub weight: Option<f64>,
}

/// Diagnosis row.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub name: String,
    pub icd10_code: Option<String>,
    /// Clinical status ("active", "resolved", ...). Open set, passed
    /// through to the Condition as-is.
    pub status: Option<String>,
    pub diagnosed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Prescription row.
#[derive(Debug, Clone, Deserialize)]
pub struct PrescriptionRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub provider_id: Uuid,
    pub medication_name: String,
    /// Free-text dose, e.g. `"500mg"`.
    pub dosage: String,
    pub frequency: String,
    pub route: Option<String>,
    pub quantity: u32,
    pub refills: u32,
    pub status: PrescriptionStatus,
    pub prescribed_at: DateTime<Utc>,
}

/// Internal patient status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Active,
    Inactive,
    Pending,
    Unknown,
}

impl PatientStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }
}

/// Internal appointment status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
    Unknown,
}

impl AppointmentStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "scheduled" => Self::Scheduled,
            "confirmed" => Self::Confirmed,
            "checked_in" => Self::CheckedIn,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "no_show" => Self::NoShow,
            _ => Self::Unknown,
        }
    }
}

/// Internal prescription status enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrescriptionStatus {
    Active,
    Completed,
    OnHold,
    Discontinued,
    Unknown,
}

impl PrescriptionStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "completed" => Self::Completed,
            "on_hold" => Self::OnHold,
            "discontinued" => Self::Discontinued,
            _ => Self::Unknown,
        }
    }
}

// Lenient string deserialization for the status enums: unknown values map
// to `Unknown` rather than rejecting the whole record.

impl<'de> Deserialize<'de> for PatientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

impl<'de> Deserialize<'de> for PrescriptionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
