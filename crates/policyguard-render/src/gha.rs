use crate::markdown::resource_label;
use policyguard_types::{EnforcementLevel, PolicyReport};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={rule}::[{type} {resource}] {message}`
pub fn render_github_annotations(report: &PolicyReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.enforcement_level {
            EnforcementLevel::Mandatory => "error",
            EnforcementLevel::Advisory => "warning",
            EnforcementLevel::Disabled => "notice",
        };

        let message = format!(
            "[{} {}] {}",
            f.resource.resource_type,
            resource_label(&f.resource),
            f.message
        );

        out.push(format!(
            "::{} title={}::{}",
            level,
            escape_property(&f.rule_name),
            escape_data(&message)
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
