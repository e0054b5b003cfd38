use crate::model::{Properties, ResourceDescriptor};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use policyguard_types::{ids, EnforcementLevel};
use serde_json::Value;
use std::collections::BTreeMap;

pub fn props(value: Value) -> Properties {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("properties must be a JSON object, got {other}"),
    }
}

pub fn resource(resource_type: &str, properties: Value) -> ResourceDescriptor {
    ResourceDescriptor::new(resource_type, props(properties)).expect("non-empty type")
}

pub fn bucket(properties: Value) -> ResourceDescriptor {
    resource(ids::TYPE_AWS_S3_BUCKET, properties)
}

pub fn config_with_levels(acl: EnforcementLevel, prefix: EnforcementLevel) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(ids::RULE_S3_NO_PUBLIC_READ.to_string(), RulePolicy::new(acl));
    rules.insert(ids::RULE_S3_BUCKET_PREFIX.to_string(), RulePolicy::new(prefix));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Mandatory,
        max_findings: 200,
        rules,
    }
}
