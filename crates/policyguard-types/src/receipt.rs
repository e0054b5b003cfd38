use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for policyguard reports.
pub const SCHEMA_REPORT_V1: &str = "policyguard.report.v1";

/// How a violation of a rule is treated by the orchestrator.
///
/// `mandatory` blocks the operation, `advisory` only warns, `disabled` turns the
/// rule off entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementLevel {
    Advisory,
    Mandatory,
    Disabled,
}

impl EnforcementLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            EnforcementLevel::Advisory => "advisory",
            EnforcementLevel::Mandatory => "mandatory",
            EnforcementLevel::Disabled => "disabled",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != EnforcementLevel::Disabled
    }
}

/// A single non-compliance finding produced by one rule for one resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub rule_name: String,
    pub message: String,
    pub enforcement_level: EnforcementLevel,
}

/// Identifies the resource a finding belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceRef {
    /// Position of the resource in the evaluated input.
    pub index: u32,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub enforcement_level: EnforcementLevel,
    pub rule_name: String,
    pub message: String,
    pub resource: ResourceRef,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `rule_name + resource type + resource name/index + message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub advisory: u32,
    pub mandatory: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct PolicyData {
    pub pack: String,
    pub pack_version: String,
    pub profile: String,

    pub resources_scanned: u32,
    pub rules_enabled: u32,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,

    /// Set when the run aborted before producing findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The report envelope written by `policyguard check`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub counts: VerdictCounts,
    pub findings: Vec<Finding>,
    pub data: PolicyData,
}
