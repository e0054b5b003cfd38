use crate::error::PolicyError;
use crate::model::Properties;
use crate::policy::{Predicate, Rule};
use policyguard_types::{ids, EnforcementLevel};
use serde_json::Value;

const PUBLIC_ACLS: [&str; 2] = ["public-read", "public-read-write"];

pub const MESSAGE: &str = "You cannot set public-read or public-read-write on an S3 bucket. \
Read more about ACLs here: https://docs.aws.amazon.com/AmazonS3/latest/dev/acl-overview.html";

/// Flags buckets whose canned ACL is `public-read` or `public-read-write`.
///
/// The match is exact and case-sensitive. Any `acl` that is not one of the
/// two literal strings, including non-string values, passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct S3NoPublicRead;

impl Predicate for S3NoPublicRead {
    fn check(&self, properties: &Properties) -> Result<Vec<String>, PolicyError> {
        match properties.get("acl") {
            Some(Value::String(acl)) if PUBLIC_ACLS.contains(&acl.as_str()) => {
                Ok(vec![MESSAGE.to_string()])
            }
            _ => Ok(Vec::new()),
        }
    }
}

pub fn rule(level: EnforcementLevel) -> Rule {
    Rule::new(
        ids::RULE_S3_NO_PUBLIC_READ,
        "Prohibits setting the publicRead or publicReadWrite permission on AWS S3 buckets.",
        level,
        S3NoPublicRead,
    )
    .for_types([ids::TYPE_AWS_S3_BUCKET])
}
