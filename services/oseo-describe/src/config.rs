//! Service configuration loading.

use anyhow::{bail, Context, Result};
use oseo_params::RecordsPerPageLimit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service settings that shape the advertised parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Upper bound for `count`. Zero disables the bound.
    #[serde(default = "default_max_records_per_page")]
    pub maximum_records_per_page: i64,

    /// Render native OpenSearch parameters as `os:key` in listings.
    #[serde(default)]
    pub qualify_native_names: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            maximum_records_per_page: default_max_records_per_page(),
            qualify_native_names: false,
        }
    }
}

fn default_max_records_per_page() -> i64 {
    100
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        let config: ServiceConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;
        config.validate()?;

        tracing::info!(
            maximum_records_per_page = config.maximum_records_per_page,
            "Loaded service config from {:?}",
            path
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        maximum_records_per_page: Option<i64>,
        qualify_native_names: bool,
    ) -> Result<Self> {
        if let Some(max) = maximum_records_per_page {
            self.maximum_records_per_page = max;
        }
        self.qualify_native_names |= qualify_native_names;
        self.validate()?;
        Ok(self)
    }

    /// Reject a negative page limit; only zero means "unbounded".
    pub fn validate(&self) -> Result<()> {
        if self.maximum_records_per_page < 0 {
            bail!(
                "maximum_records_per_page must be zero (unbounded) or positive, got {}",
                self.maximum_records_per_page
            );
        }
        Ok(())
    }
}

impl RecordsPerPageLimit for ServiceConfig {
    fn maximum_records_per_page(&self) -> i64 {
        self.maximum_records_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.maximum_records_per_page, 100);
        assert!(!config.qualify_native_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ServiceConfig = serde_yaml::from_str("qualify_native_names: true").unwrap();
        assert_eq!(config.maximum_records_per_page, 100);
        assert!(config.qualify_native_names);
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::default().with_overrides(Some(0), true).unwrap();
        assert_eq!(config.maximum_records_per_page, 0);
        assert!(config.qualify_native_names);

        assert!(ServiceConfig::default().with_overrides(Some(-3), false).is_err());
    }
}
