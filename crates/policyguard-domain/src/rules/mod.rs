//! Built-in rules for the `aws-typescript` pack.

use crate::error::PolicyError;
use crate::policy::{EffectiveConfig, PolicyPack, PolicySet, Rule};
use policyguard_types::ids;

mod s3_bucket_prefix;
mod s3_no_public_read;
mod utils;


pub use s3_bucket_prefix::S3BucketPrefix;
pub use s3_no_public_read::S3NoPublicRead;

/// Build the built-in rules in declaration order, with enforcement levels and
/// parameters taken from the effective config.
pub fn builtin_rules(cfg: &EffectiveConfig) -> Vec<Rule> {
    vec![
        s3_no_public_read::rule(cfg.enforcement_level(ids::RULE_S3_NO_PUBLIC_READ)),
        s3_bucket_prefix::rule(
            cfg.enforcement_level(ids::RULE_S3_BUCKET_PREFIX),
            cfg.rule_policy(ids::RULE_S3_BUCKET_PREFIX)
                .and_then(|p| p.required_prefix.as_deref())
                .unwrap_or(ids::DEFAULT_BUCKET_PREFIX),
        ),
    ]
}

pub fn builtin_pack(cfg: &EffectiveConfig) -> Result<PolicyPack, PolicyError> {
    Ok(PolicyPack {
        name: ids::PACK_AWS_TYPESCRIPT.to_string(),
        version: ids::PACK_VERSION.to_string(),
        policies: PolicySet::new(builtin_rules(cfg))?,
    })
}
