use anyhow::Context;
use policyguard_types::{
    PolicyData, PolicyReport, ToolMeta, Verdict, VerdictCounts, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PolicyReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }
    serde_json::from_value(value).context("parse policyguard v1 report")
}

pub fn serialize_report(report: &PolicyReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "policyguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// A failing report recording why the run could not complete.
pub fn runtime_error_report(message: &str) -> PolicyReport {
    let now = OffsetDateTime::now_utc();
    PolicyReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        counts: VerdictCounts::default(),
        findings: Vec::new(),
        data: PolicyData {
            error: Some(message.to_string()),
            ..PolicyData::default()
        },
    }
}
