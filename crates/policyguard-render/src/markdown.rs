use policyguard_types::{EnforcementLevel, PolicyReport, ResourceRef, Verdict};

pub fn render_markdown(report: &PolicyReport) -> String {
    let mut out = String::new();

    out.push_str("# Policyguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Pack: `{}` {} (profile `{}`)\n- Findings: {} (emitted) / {} (total) across {} resource(s)\n\n",
        verdict,
        report.data.pack,
        report.data.pack_version,
        report.data.profile,
        report.data.findings_emitted,
        report.data.findings_total,
        report.data.resources_scanned,
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let level = match f.enforcement_level {
            EnforcementLevel::Mandatory => "MANDATORY",
            EnforcementLevel::Advisory => "ADVISORY",
            EnforcementLevel::Disabled => "DISABLED",
        };
        out.push_str(&format!(
            "- [{}] `{}` on `{}` `{}`: {}\n",
            level,
            f.rule_name,
            f.resource.resource_type,
            resource_label(&f.resource),
            f.message
        ));
    }

    out
}

pub(crate) fn resource_label(resource: &ResourceRef) -> String {
    match &resource.name {
        Some(name) => name.clone(),
        None => format!("#{}", resource.index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{finding, report};

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&report(Verdict::Pass, Vec::new()));
        assert!(md.contains("No findings"));
        assert!(md.contains("Verdict: **PASS**"));
    }

    #[test]
    fn renders_findings_snapshot() {
        let r = report(
            Verdict::Fail,
            vec![
                finding(
                    EnforcementLevel::Mandatory,
                    "s3-no-public-read",
                    "no public ACLs",
                    Some("logbucket"),
                ),
                finding(
                    EnforcementLevel::Advisory,
                    "s3-bucket-prefix",
                    "S3 bucket must use 'logsbucket' prefix. Current prefix: ''",
                    None,
                ),
            ],
        );

        insta::assert_snapshot!(render_markdown(&r), @r"
        # Policyguard report

        - Verdict: **FAIL**
        - Pack: `aws-typescript` 0.1.0 (profile `mandatory`)
        - Findings: 2 (emitted) / 2 (total) across 1 resource(s)

        ## Findings

        - [MANDATORY] `s3-no-public-read` on `aws.s3.Bucket` `logbucket`: no public ACLs
        - [ADVISORY] `s3-bucket-prefix` on `aws.s3.Bucket` `#0`: S3 bucket must use 'logsbucket' prefix. Current prefix: ''
        ");
    }

    #[test]
    fn renders_truncation_note() {
        let mut r = report(
            Verdict::Warn,
            vec![finding(EnforcementLevel::Advisory, "s3-bucket-prefix", "bad", None)],
        );
        r.data.findings_total = 3;
        r.data.truncated_reason = Some("findings truncated to max_findings=1".to_string());

        let md = render_markdown(&r);
        assert!(md.contains("Verdict: **WARN**"));
        assert!(md.contains("> Note: findings truncated to max_findings=1"));
        assert!(md.contains("1 (emitted) / 3 (total)"));
    }
}
