//! Generator configuration, persisted as TOML.
//!
//! ```toml
//! domain_type = "DomainDefinition"
//! problem_type = "ProblemDefinition"
//! strict_ambiguity = false
//! parallel = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings shared by the loaders and the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Local name of the class whose direct instances are domain definitions.
    #[serde(default = "default_domain_type")]
    pub domain_type: String,
    /// Local name of the class whose direct instances are problem definitions.
    #[serde(default = "default_problem_type")]
    pub problem_type: String,
    /// Treat more than one specialization/negation/domain target as an error
    /// instead of warning and taking the first.
    #[serde(default)]
    pub strict_ambiguity: bool,
    /// Render domain and problem units on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

fn default_domain_type() -> String {
    "DomainDefinition".into()
}
fn default_problem_type() -> String {
    "ProblemDefinition".into()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            domain_type: default_domain_type(),
            problem_type: default_problem_type(),
            strict_ambiguity: false,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&text)
    }
}
