//! Render use cases: markdown and GitHub annotations from in-memory reports.

use policyguard_types::PolicyReport;

pub fn render_markdown(report: &PolicyReport) -> String {
    policyguard_render::render_markdown(report)
}

pub fn render_annotations(report: &PolicyReport, max: usize) -> Vec<String> {
    policyguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_error_report;
    use policyguard_types::{EnforcementLevel, Finding, ResourceRef};

    fn sample_report() -> PolicyReport {
        let mut report = runtime_error_report("ignored");
        report.data.error = None;
        report.findings = (0..3)
            .map(|i| Finding {
                enforcement_level: EnforcementLevel::Advisory,
                rule_name: "s3-bucket-prefix".to_string(),
                message: format!("bad {i}"),
                resource: ResourceRef {
                    index: i,
                    resource_type: "aws.s3.Bucket".to_string(),
                    name: None,
                },
                fingerprint: None,
            })
            .collect();
        report
    }

    #[test]
    fn render_annotations_respects_max() {
        let annotations = render_annotations(&sample_report(), 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("## Findings"));
    }
}
