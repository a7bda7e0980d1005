//! Structural validation of candidate FHIR resources.
//!
//! Validation is advisory: it never fails and never panics, it only reports.
//! Callers decide whether an invalid resource is rejected, logged, or
//! included in a bundle anyway.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Result of validating one resource.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Structurally validate a candidate resource of any shape.
///
/// Universal checks: `resourceType` and a non-empty `id` must be present.
/// Resource types without specific rules pass the type-specific phase
/// trivially.
pub fn validate_resource(resource: &JsonValue) -> ValidationReport {
    let mut errors = Vec::new();

    let resource_type = resource.get("resourceType").and_then(JsonValue::as_str);
    if resource_type.is_none() {
        errors.push("resource must have a resourceType".to_string());
    }
    if !has_nonempty_string(resource, "id") {
        errors.push("resource must have an id".to_string());
    }

    match resource_type {
        Some("Patient") => {
            if !has_nonempty_array(resource, "name") {
                errors.push("Patient must have at least one name".to_string());
            }
        }
        Some("Appointment") => {
            if !has_nonempty_string(resource, "status") {
                errors.push("Appointment must have a status".to_string());
            }
            if !has_nonempty_array(resource, "participant") {
                errors.push("Appointment must have at least one participant".to_string());
            }
        }
        Some("Observation") => {
            if !has_nonempty_string(resource, "status") {
                errors.push("Observation must have a status".to_string());
            }
            if resource.get("code").is_none() {
                errors.push("Observation must have a code".to_string());
            }
        }
        _ => {}
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

fn has_nonempty_string(resource: &JsonValue, field: &str) -> bool {
    resource
        .get(field)
        .and_then(JsonValue::as_str)
        .is_some_and(|s| !s.is_empty())
}

fn has_nonempty_array(resource: &JsonValue, field: &str) -> bool {
    resource
        .get(field)
        .and_then(JsonValue::as_array)
        .is_some_and(|a| !a.is_empty())
}
