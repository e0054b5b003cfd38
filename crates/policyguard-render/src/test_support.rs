use policyguard_types::{
    EnforcementLevel, Finding, PolicyData, PolicyReport, ResourceRef, ToolMeta, Verdict,
    VerdictCounts, SCHEMA_REPORT_V1,
};
use time::macros::datetime;

pub fn finding(level: EnforcementLevel, rule: &str, message: &str, name: Option<&str>) -> Finding {
    Finding {
        enforcement_level: level,
        rule_name: rule.to_string(),
        message: message.to_string(),
        resource: ResourceRef {
            index: 0,
            resource_type: "aws.s3.Bucket".to_string(),
            name: name.map(str::to_string),
        },
        fingerprint: None,
    }
}

pub fn report(verdict: Verdict, findings: Vec<Finding>) -> PolicyReport {
    let emitted = findings.len() as u32;
    PolicyReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "policyguard".to_string(),
            version: "0.0.0".to_string(),
        },
        started_at: datetime!(2026-01-01 0:00 UTC),
        finished_at: datetime!(2026-01-01 0:00 UTC),
        verdict,
        counts: VerdictCounts::default(),
        findings,
        data: PolicyData {
            pack: "aws-typescript".to_string(),
            pack_version: "0.1.0".to_string(),
            profile: "mandatory".to_string(),
            resources_scanned: 1,
            rules_enabled: 2,
            findings_total: emitted,
            findings_emitted: emitted,
            truncated_reason: None,
            error: None,
        },
    }
}
