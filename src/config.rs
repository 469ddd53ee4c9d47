use serde::{Deserialize, Serialize};

/// How the decoder reacts to invalid fields.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Stop at the first field that fails to decode.
    #[default]
    #[serde(alias = "fast")]
    FailFast,
    /// Decode every field and report all failures together.
    #[serde(alias = "all")]
    CollectAll,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub error_mode: ErrorMode,
}

impl Config {
    /// Load a configuration from YAML, e.g. `error-mode: collect-all`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn collect_all() -> Self {
        Self {
            error_mode: ErrorMode::CollectAll,
        }
    }
}
