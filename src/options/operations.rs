//! Loading, serialization and validation of parse options.

use super::{ParseOptions, MAX_STRIP_COMPONENTS};
use crate::error::ConfigError;
use std::path::Path;

impl ParseOptions {
    /// Load options from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let options: ParseOptions = serde_yaml::from_str(yaml)?;

        options.validate()?;
        Ok(options)
    }

    /// Serialize options to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate option values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip_components > MAX_STRIP_COMPONENTS {
            return Err(ConfigError::Invalid(format!(
                "strip_components must be at most {} (found {})",
                MAX_STRIP_COMPONENTS, self.strip_components
            )));
        }
        Ok(())
    }

    /// Return a copy with a different `strip_components`.
    pub fn with_strip_components(mut self, strip_components: usize) -> Self {
        self.strip_components = strip_components;
        self
    }
}
