//! # Calendar Policy — Arithmetic Configuration
//!
//! The two choices an embedding application makes once and passes to the
//! `*_with` operations:
//!
//! - `date_resolver`: how an invalid date produced by arithmetic is repaired
//!   (default `previous_valid`).
//! - `local_resolution`: how a zoned local date-time in a gap or overlap is
//!   placed on the time-line (default `earlier`).
//!
//! ```yaml
//! date_resolver: next_valid
//! local_resolution: reject
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use almanac_core::{CalendarError, DateResolver};

use crate::zone::ResolutionPolicy;

/// Resolver and resolution policy applied by `*_with` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarPolicy {
    /// Resolves day overflow after year and month changes.
    pub date_resolver: DateResolver,
    /// Maps local date-times in a zone gap or overlap onto the time-line.
    pub local_resolution: ResolutionPolicy,
}

impl CalendarPolicy {
    /// Pair a date resolver with a local-time resolution policy.
    pub const fn new(date_resolver: DateResolver, local_resolution: ResolutionPolicy) -> Self {
        Self {
            date_resolver,
            local_resolution,
        }
    }

    /// Reject every invalid date and every gap or overlap.
    pub const fn strict() -> Self {
        Self::new(DateResolver::Strict, ResolutionPolicy::Reject)
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] if the YAML is malformed or names an
    /// unknown policy.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CalendarError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CalendarError::Config(format!("failed to parse policy YAML: {e}")))
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] if the JSON is malformed or names an
    /// unknown policy.
    pub fn from_json_str(json: &str) -> Result<Self, CalendarError> {
        serde_json::from_str(json)
            .map_err(|e| CalendarError::Config(format!("failed to parse policy JSON: {e}")))
    }

    /// Load from a `.json` file, or YAML for any other extension.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CalendarError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalendarError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let policy = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_yaml_str(&text)?,
        };
        tracing::debug!(
            path = %path.display(),
            date_resolver = policy.date_resolver.as_str(),
            local_resolution = policy.local_resolution.as_str(),
            "loaded calendar policy"
        );
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = CalendarPolicy::default();
        assert_eq!(policy.date_resolver, DateResolver::PreviousValid);
        assert_eq!(policy.local_resolution, ResolutionPolicy::Earlier);
        assert_eq!(CalendarPolicy::from_yaml_str("{}").unwrap(), policy);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "date_resolver: next_valid\nlocal_resolution: reject\n";
        let policy = CalendarPolicy::from_yaml_str(yaml).unwrap();
        assert_eq!(policy.date_resolver, DateResolver::NextValid);
        assert_eq!(policy.local_resolution, ResolutionPolicy::Reject);
    }

    #[test]
    fn test_partial_yaml_keeps_other_default() {
        let policy = CalendarPolicy::from_yaml_str("local_resolution: later").unwrap();
        assert_eq!(policy.date_resolver, DateResolver::PreviousValid);
        assert_eq!(policy.local_resolution, ResolutionPolicy::Later);
    }

    #[test]
    fn test_from_json() {
        let policy = CalendarPolicy::from_json_str(r#"{"date_resolver":"strict"}"#).unwrap();
        assert_eq!(policy.date_resolver, DateResolver::Strict);
    }

    #[test]
    fn test_rejects_unknown_values() {
        let err = CalendarPolicy::from_yaml_str("date_resolver: nearest").unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
        let err = CalendarPolicy::from_yaml_str("resolver: strict").unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));
        let err = CalendarPolicy::from_json_str("[").unwrap_err();
        assert!(err.to_string().contains("policy JSON"));
    }

    #[test]
    fn test_from_path() {
        let dir = std::env::temp_dir().join(format!("almanac-policy-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let yaml = dir.join("policy.yaml");
        std::fs::write(&yaml, "local_resolution: reject\n").unwrap();
        let json = dir.join("policy.json");
        std::fs::write(&json, r#"{"date_resolver":"next_valid"}"#).unwrap();

        assert_eq!(
            CalendarPolicy::from_path(&yaml).unwrap().local_resolution,
            ResolutionPolicy::Reject
        );
        assert_eq!(
            CalendarPolicy::from_path(&json).unwrap().date_resolver,
            DateResolver::NextValid
        );
        assert!(CalendarPolicy::from_path(&dir.join("missing.yaml")).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
