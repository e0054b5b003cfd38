use thiserror::Error;

/// Errors raised while building a policy set or running a predicate.
///
/// Violations are never errors; they are returned as data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("resource type must not be empty")]
    EmptyResourceType,

    #[error("duplicate rule name in policy set: {0}")]
    DuplicateRule(String),

    #[error("rule '{rule}': property '{property}' must be {expected}, found {found}")]
    MalformedInput {
        rule: String,
        property: String,
        expected: &'static str,
        found: &'static str,
    },
}
