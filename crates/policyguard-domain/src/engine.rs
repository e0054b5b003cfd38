use crate::error::PolicyError;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::ResourceDescriptor;
use crate::policy::{EffectiveConfig, FailOn, PolicySet};
use crate::report::{count_findings, DomainReport};
use crate::rules;
use policyguard_types::{EnforcementLevel, Finding, PolicyData, ResourceRef, Verdict, Violation};

/// Apply every enabled rule in `policies` to `resource`.
///
/// Violations come back in rule declaration order, then in the order each
/// predicate produced its messages. Rules whose type filter does not match are
/// skipped, as are disabled rules. A predicate error aborts the evaluation and
/// is returned unchanged.
pub fn evaluate(
    resource: &ResourceDescriptor,
    policies: &PolicySet,
) -> Result<Vec<Violation>, PolicyError> {
    let mut violations = Vec::new();

    for rule in policies.rules() {
        if !rule.enforcement_level.is_enabled() {
            continue;
        }
        if !rule.applies_to_type(resource.resource_type()) {
            continue;
        }
        for message in rule.check(resource.properties())? {
            violations.push(Violation {
                rule_name: rule.name.clone(),
                message,
                enforcement_level: rule.enforcement_level,
            });
        }
    }

    Ok(violations)
}

/// Evaluate a batch of resources against the built-in pack configured by `cfg`.
pub fn evaluate_resources(
    resources: &[ResourceDescriptor],
    cfg: &EffectiveConfig,
) -> Result<DomainReport, PolicyError> {
    let pack = rules::builtin_pack(cfg)?;

    let mut findings: Vec<Finding> = Vec::new();
    for (index, resource) in resources.iter().enumerate() {
        let resource_key = match resource.name() {
            Some(name) => name.to_string(),
            None => format!("#{index}"),
        };
        for violation in evaluate(resource, &pack.policies)? {
            let fingerprint = fingerprint_for_resource(
                &violation.rule_name,
                resource.resource_type(),
                &resource_key,
                &violation.message,
            );
            findings.push(Finding {
                enforcement_level: violation.enforcement_level,
                rule_name: violation.rule_name,
                message: violation.message,
                resource: ResourceRef {
                    index: saturating_u32(index),
                    resource_type: resource.resource_type().to_string(),
                    name: resource.name().map(str::to_string),
                },
                fingerprint: Some(fingerprint),
            });
        }
    }

    // Verdict and counts reflect every finding, even those truncated away.
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = count_findings(&findings);
    let total = saturating_u32(findings.len());

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = PolicyData {
        pack: pack.name,
        pack_version: pack.version,
        profile: cfg.profile.clone(),
        resources_scanned: saturating_u32(resources.len()),
        rules_enabled: saturating_u32(pack.policies.enabled_count()),
        findings_total: total,
        findings_emitted: saturating_u32(emitted.len()),
        truncated_reason,
        error: None,
    };

    Ok(DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    })
}

/// Report counters are `u32`; larger values clamp rather than wrap.
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_mandatory = findings
        .iter()
        .any(|f| f.enforcement_level == EnforcementLevel::Mandatory);
    if has_mandatory {
        return Verdict::Fail;
    }

    let has_advisory = findings
        .iter()
        .any(|f| f.enforcement_level == EnforcementLevel::Advisory);
    if has_advisory {
        return match fail_on {
            FailOn::Advisory => Verdict::Fail,
            FailOn::Mandatory => Verdict::Warn,
        };
    }

    Verdict::Pass
}
