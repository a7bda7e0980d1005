//! Exporter configuration.

use fhir_convert::BundleType;

/// Behavior knobs for [`crate::PatientExporter`].
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Bundle type for `patient_bundle_fhir` output.
    pub bundle_type: BundleType,
    /// Run the structural validator over each mapped resource.
    pub validate: bool,
    /// Treat a validation failure as an error instead of a warning. Only
    /// meaningful when `validate` is on.
    pub strict: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bundle_type: BundleType::Collection,
            validate: true,
            strict: false,
        }
    }
}

impl ExportConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            bundle_type: BundleType::Collection,
            validate: !flag("FHIR_EXPORT_SKIP_VALIDATION"),
            strict: flag("FHIR_EXPORT_STRICT"),
        }
    }
}

fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_the_export_flags() {
        // SAFETY: this is the only test in the crate touching these
        // variables, and unit tests share one process.
        unsafe {
            std::env::remove_var("FHIR_EXPORT_SKIP_VALIDATION");
            std::env::remove_var("FHIR_EXPORT_STRICT");
        }
        let config = ExportConfig::from_env();
        assert!(config.validate);
        assert!(!config.strict);
        assert_eq!(config.bundle_type, BundleType::Collection);

        unsafe {
            std::env::set_var("FHIR_EXPORT_SKIP_VALIDATION", "1");
            std::env::set_var("FHIR_EXPORT_STRICT", "TRUE");
        }
        let config = ExportConfig::from_env();
        assert!(!config.validate);
        assert!(config.strict);

        // Anything other than "1"/"true" leaves a flag unset.
        unsafe {
            std::env::set_var("FHIR_EXPORT_SKIP_VALIDATION", "0");
            std::env::set_var("FHIR_EXPORT_STRICT", "no");
        }
        let config = ExportConfig::from_env();
        assert!(config.validate);
        assert!(!config.strict);

        unsafe {
            std::env::remove_var("FHIR_EXPORT_SKIP_VALIDATION");
            std::env::remove_var("FHIR_EXPORT_STRICT");
        }
    }
}
