//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{PolicyguardConfigV1, RuleConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `policyguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicyguardConfigV1> {
    let cfg: PolicyguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + per-rule config + overrides).
pub fn resolve_config(
    cfg: PolicyguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `policyguard.toml`, for editor tooling.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(PolicyguardConfigV1)
}
