use crate::error::PolicyError;
use crate::model::Properties;
use policyguard_types::EnforcementLevel;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// A rule's check: inspects resource properties and returns zero or more
/// violation messages.
///
/// An `Err` means the input could not be judged at all (e.g. a property had
/// the wrong type); it is propagated to the caller as-is.
pub trait Predicate: Send + Sync {
    fn check(&self, properties: &Properties) -> Result<Vec<String>, PolicyError>;
}

impl<F> Predicate for F
where
    F: Fn(&Properties) -> Result<Vec<String>, PolicyError> + Send + Sync,
{
    fn check(&self, properties: &Properties) -> Result<Vec<String>, PolicyError> {
        self(properties)
    }
}

#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub enforcement_level: EnforcementLevel,
    /// Resource types this rule applies to. Empty means every type.
    pub applies_to: BTreeSet<String>,
    predicate: Arc<dyn Predicate>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        enforcement_level: EnforcementLevel,
        predicate: impl Predicate + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enforcement_level,
            applies_to: BTreeSet::new(),
            predicate: Arc::new(predicate),
        }
    }

    /// Restrict the rule to the given resource types.
    pub fn for_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applies_to.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn applies_to_type(&self, resource_type: &str) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(resource_type)
    }

    pub fn check(&self, properties: &Properties) -> Result<Vec<String>, PolicyError> {
        self.predicate.check(properties)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("enforcement_level", &self.enforcement_level)
            .field("applies_to", &self.applies_to)
            .finish_non_exhaustive()
    }
}

/// Ordered, read-only collection of rules with unique names.
#[derive(Clone, Debug, Default)]
pub struct PolicySet {
    rules: Vec<Rule>,
}

impl PolicySet {
    pub fn new(rules: Vec<Rule>) -> Result<Self, PolicyError> {
        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(PolicyError::DuplicateRule(rule.name.clone()));
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn enabled_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| r.enforcement_level.is_enabled())
            .count()
    }
}

/// Named, versioned collection of rules applied together.
#[derive(Clone, Debug)]
pub struct PolicyPack {
    pub name: String,
    pub version: String,
    pub policies: PolicySet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Mandatory,
    Advisory,
}

/// Per-rule configuration resolved from presets and repo config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enforcement_level: EnforcementLevel,
    /// Only meaningful for `s3-bucket-prefix`.
    pub required_prefix: Option<String>,
}

impl RulePolicy {
    pub fn new(enforcement_level: EnforcementLevel) -> Self {
        Self {
            enforcement_level,
            required_prefix: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    /// Enforcement level for a rule; unknown rules are disabled.
    pub fn enforcement_level(&self, rule_name: &str) -> EnforcementLevel {
        self.rules
            .get(rule_name)
            .map(|p| p.enforcement_level)
            .unwrap_or(EnforcementLevel::Disabled)
    }

    pub fn rule_policy(&self, rule_name: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_name)
    }
}
