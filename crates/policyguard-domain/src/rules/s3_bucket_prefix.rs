use super::utils::optional_str;
use crate::error::PolicyError;
use crate::model::Properties;
use crate::policy::{Predicate, Rule};
use policyguard_types::{ids, EnforcementLevel};

/// Requires the `bucket` name to start with a fixed prefix.
///
/// A missing name counts as the empty string and is flagged.
#[derive(Clone, Debug)]
pub struct S3BucketPrefix {
    pub required_prefix: String,
}

impl Predicate for S3BucketPrefix {
    fn check(&self, properties: &Properties) -> Result<Vec<String>, PolicyError> {
        let bucket = optional_str(properties, "bucket", ids::RULE_S3_BUCKET_PREFIX)?.unwrap_or("");
        if bucket.starts_with(&self.required_prefix) {
            return Ok(Vec::new());
        }
        Ok(vec![format!(
            "S3 bucket must use '{}' prefix. Current prefix: '{}'",
            self.required_prefix, bucket
        )])
    }
}

pub fn rule(level: EnforcementLevel, required_prefix: &str) -> Rule {
    Rule::new(
        ids::RULE_S3_BUCKET_PREFIX,
        "Ensures S3 buckets use the required naming prefix.",
        level,
        S3BucketPrefix {
            required_prefix: required_prefix.to_string(),
        },
    )
    .for_types([ids::TYPE_AWS_S3_BUCKET])
}
