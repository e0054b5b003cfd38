use policyguard_types::{EnforcementLevel, Finding, PolicyData, Verdict, VerdictCounts};

/// Count emitted findings per enforcement level.
pub fn count_findings(findings: &[Finding]) -> VerdictCounts {
    let mut counts = VerdictCounts::default();
    for f in findings {
        match f.enforcement_level {
            EnforcementLevel::Advisory => counts.advisory += 1,
            EnforcementLevel::Mandatory => counts.mandatory += 1,
            EnforcementLevel::Disabled => {}
        }
    }
    counts
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: PolicyData,
    pub counts: VerdictCounts,
}
