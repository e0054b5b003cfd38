use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a resource finding.
///
/// Identity fields:
/// - rule name
/// - resource type
/// - resource name (or `#<index>` when unnamed)
/// - message
pub fn fingerprint_for_resource(
    rule_name: &str,
    resource_type: &str,
    resource_key: &str,
    message: &str,
) -> String {
    let canonical = [rule_name, resource_type, resource_key, message].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
