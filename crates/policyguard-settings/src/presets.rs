use policyguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use policyguard_types::{ids, EnforcementLevel};
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "mandatory";
pub const DEFAULT_MAX_FINDINGS: usize = 200;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "mandatory" => Some(profile_with(profile, EnforcementLevel::Mandatory)),
        "advisory" => Some(profile_with(profile, EnforcementLevel::Advisory)),
        _ => None,
    }
}

fn profile_with(profile: &str, level: EnforcementLevel) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        fail_on: FailOn::Mandatory,
        max_findings: DEFAULT_MAX_FINDINGS,
        rules: default_rules(level),
    }
}

fn default_rules(level: EnforcementLevel) -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();

    m.insert(ids::RULE_S3_NO_PUBLIC_READ.to_string(), RulePolicy::new(level));
    m.insert(
        ids::RULE_S3_BUCKET_PREFIX.to_string(),
        RulePolicy {
            enforcement_level: level,
            required_prefix: Some(ids::DEFAULT_BUCKET_PREFIX.to_string()),
        },
    );

    m
}
