use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `policyguard.toml` schema v1.
///
/// This is a *user-facing* config model: values stay as strings here and are
/// validated during resolution so error messages can name the offending rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyguardConfigV1 {
    /// Optional schema string for tooling (`policyguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset: `mandatory` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Which level fails the run: `mandatory` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Map of rule name -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override the preset level: `advisory`, `mandatory`, or `disabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement_level: Option<String>,

    /// Required bucket name prefix (`s3-bucket-prefix` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_prefix: Option<String>,
}
