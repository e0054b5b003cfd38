//! Explain registry for rules.
//!
//! Maps rule names to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after resource property examples.
    pub examples: ExamplePair,
}

/// Before and after property examples (JSON).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Properties that would trigger a violation.
    pub before: &'static str,
    /// Properties that pass the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule name.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_S3_NO_PUBLIC_READ => Some(explain_s3_no_public_read()),
        ids::RULE_S3_BUCKET_PREFIX => Some(explain_s3_bucket_prefix()),
        _ => None,
    }
}

/// List all known rule names.
pub fn all_rule_names() -> &'static [&'static str] {
    &[ids::RULE_S3_NO_PUBLIC_READ, ids::RULE_S3_BUCKET_PREFIX]
}

fn explain_s3_no_public_read() -> Explanation {
    Explanation {
        title: "No Public-Read S3 Buckets",
        description: "\
Prohibits setting the `public-read` or `public-read-write` canned ACL on AWS S3 buckets.

A public canned ACL grants every anonymous user on the internet read access (and, for
`public-read-write`, write access) to the bucket contents. Only the two literal values
are flagged; the comparison is exact and case-sensitive.

Applies to: aws.s3.Bucket",
        remediation: "\
Use a private canned ACL and grant access explicitly:
- Set `acl` to `private` (or omit it; S3 defaults to private)
- Serve public content through a CDN origin access identity instead of a public ACL
- See https://docs.aws.amazon.com/AmazonS3/latest/dev/acl-overview.html",
        examples: ExamplePair {
            before: r#"{ "acl": "public-read-write" }"#,
            after: r#"{ "acl": "private" }"#,
        },
    }
}

fn explain_s3_bucket_prefix() -> Explanation {
    Explanation {
        title: "S3 Bucket Naming Prefix",
        description: "\
Ensures S3 buckets use the required naming prefix (default `logsbucket`).

A missing `bucket` property is treated as an empty name and is therefore flagged.
The violation message includes both the required prefix and the current value.

Applies to: aws.s3.Bucket",
        remediation: "\
Name the bucket with the required prefix, or change `required_prefix` for this rule in
policyguard.toml if your organisation uses a different convention:

    [rules.s3-bucket-prefix]
    required_prefix = \"logsbucket\"",
        examples: ExamplePair {
            before: r#"{ "bucket": "my-app-logs" }"#,
            after: r#"{ "bucket": "logsbucket-my-app" }"#,
        },
    }
}
