//! The `check` use case: evaluate policy over a batch of resources and produce a report.

use anyhow::Context;
use policyguard_domain::model::ResourceDescriptor;
use policyguard_settings::{Overrides, ResolvedConfig};
use policyguard_types::{PolicyReport, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Resource descriptions as JSON.
    pub resources_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PolicyReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse a resources file: either `{"resources": [...]}` or a bare array.
pub fn parse_resources_json(text: &str) -> anyhow::Result<Vec<ResourceDescriptor>> {
    let mut value: serde_json::Value =
        serde_json::from_str(text).context("parse resources json")?;

    let list = match value.get_mut("resources").map(serde_json::Value::take) {
        Some(inner) => inner,
        None if value.is_array() => value,
        None => anyhow::bail!(
            "resources must be an array of {{type, name?, properties}} or an object with a `resources` array"
        ),
    };
    serde_json::from_value(list).context("parse resource descriptions")
}

/// Run the check use case: parse config, parse resources, evaluate policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        policyguard_settings::PolicyguardConfigV1::default()
    } else {
        policyguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = policyguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    for (rule, policy) in &resolved.effective.rules {
        debug!(rule = %rule, level = policy.enforcement_level.as_str(), "rule configured");
    }

    let resources = parse_resources_json(input.resources_text)?;
    debug!(count = resources.len(), "resources loaded");

    let domain_report = policyguard_domain::evaluate_resources(&resources, &resolved.effective)
        .context("evaluate resources")?;

    info!(
        resources = domain_report.data.resources_scanned,
        findings = domain_report.data.findings_total,
        mandatory = domain_report.counts.mandatory,
        advisory = domain_report.counts.advisory,
        verdict = ?domain_report.verdict,
        "policy evaluation finished"
    );

    let report = PolicyReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        counts: domain_report.counts,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
