//! Stable identifiers for rules, packs, and resource types.
//!
//! Rule names are kebab-case and unique within a pack.

// Packs
pub const PACK_AWS_TYPESCRIPT: &str = "aws-typescript";
pub const PACK_VERSION: &str = "0.1.0";

// Rules
pub const RULE_S3_NO_PUBLIC_READ: &str = "s3-no-public-read";
pub const RULE_S3_BUCKET_PREFIX: &str = "s3-bucket-prefix";

// Resource types
pub const TYPE_AWS_S3_BUCKET: &str = "aws.s3.Bucket";

// Defaults: s3-bucket-prefix
pub const DEFAULT_BUCKET_PREFIX: &str = "logsbucket";
