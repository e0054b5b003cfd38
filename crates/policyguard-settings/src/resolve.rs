use crate::{model::PolicyguardConfigV1, presets};
use anyhow::Context;
use policyguard_domain::policy::{EffectiveConfig, FailOn};
use policyguard_types::{ids, EnforcementLevel};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PolicyguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!("unknown profile: {profile} (expected 'mandatory' or 'advisory')")
    })?;

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-rule overrides
    for (rule_name, rc) in cfg.rules.iter() {
        let entry = effective
            .rules
            .get_mut(rule_name)
            .with_context(|| format!("unknown rule in config: {rule_name}"))?;

        if let Some(level) = rc.enforcement_level.as_deref() {
            entry.enforcement_level = parse_enforcement_level(level)
                .with_context(|| format!("invalid enforcement_level for {rule_name}"))?;
        }
        if let Some(prefix) = rc.required_prefix.as_deref() {
            if rule_name != ids::RULE_S3_BUCKET_PREFIX {
                anyhow::bail!("required_prefix is not supported by {rule_name}");
            }
            if prefix.is_empty() {
                anyhow::bail!("required_prefix for {rule_name} must not be empty");
            }
            entry.required_prefix = Some(prefix.to_string());
        }
    }

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_enforcement_level(v: &str) -> anyhow::Result<EnforcementLevel> {
    match v {
        "advisory" => Ok(EnforcementLevel::Advisory),
        "mandatory" => Ok(EnforcementLevel::Mandatory),
        "disabled" => Ok(EnforcementLevel::Disabled),
        other => anyhow::bail!(
            "unknown enforcement level: {other} (expected advisory|mandatory|disabled)"
        ),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "mandatory" => Ok(FailOn::Mandatory),
        "advisory" => Ok(FailOn::Advisory),
        other => anyhow::bail!("unknown fail_on: {other} (expected mandatory|advisory)"),
    }
}
