//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - type filtering
//! - disabled rules staying silent
//! - evaluation determinism

use crate::engine::{evaluate, evaluate_resources};
use crate::model::{Properties, ResourceDescriptor};
use crate::rules::builtin_pack;
use crate::test_support::config_with_levels;
use policyguard_types::{ids, EnforcementLevel};
use proptest::prelude::*;
use serde_json::Value;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for JSON-like property values, nested a few levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        prop_oneof![
            Just("public-read".to_string()),
            Just("public-read-write".to_string()),
            Just("private".to_string()),
            "[a-z-]{0,16}",
        ]
        .prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_properties() -> impl Strategy<Value = Properties> {
    prop::collection::btree_map(
        prop_oneof![Just("acl".to_string()), Just("bucket".to_string()), "[a-z]{1,8}"],
        arb_value(),
        0..6,
    )
}

/// Resource types that are never `aws.s3.Bucket`.
fn arb_other_type() -> impl Strategy<Value = String> {
    "[a-z]{2,6}\\.[a-z0-9]{2,6}\\.[A-Z][A-Za-z]{1,10}"
        .prop_filter("must not be a bucket", |t| t != ids::TYPE_AWS_S3_BUCKET)
}

/// String-only bucket properties so predicates never error.
fn arb_bucket_properties() -> impl Strategy<Value = Properties> {
    (
        prop::option::of(prop_oneof![
            Just("public-read".to_string()),
            Just("public-read-write".to_string()),
            "[a-z-]{0,20}",
        ]),
        prop::option::of("(logsbucket)?[a-z0-9-]{0,20}"),
    )
        .prop_map(|(acl, name)| {
            let mut props = Properties::new();
            if let Some(acl) = acl {
                props.insert("acl".to_string(), Value::String(acl));
            }
            if let Some(name) = name {
                props.insert("bucket".to_string(), Value::String(name));
            }
            props
        })
}

fn arb_level() -> impl Strategy<Value = EnforcementLevel> {
    prop_oneof![
        Just(EnforcementLevel::Advisory),
        Just(EnforcementLevel::Mandatory),
        Just(EnforcementLevel::Disabled),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn non_bucket_types_never_violate(ty in arb_other_type(), props in arb_properties()) {
        let cfg = config_with_levels(EnforcementLevel::Mandatory, EnforcementLevel::Mandatory);
        let pack = builtin_pack(&cfg).expect("pack");
        let resource = ResourceDescriptor::new(ty, props).expect("non-empty type");

        let out = evaluate(&resource, &pack.policies).expect("filtered rules never run");
        prop_assert!(out.is_empty());
    }

    #[test]
    fn disabled_rules_never_violate(props in arb_properties()) {
        let cfg = config_with_levels(EnforcementLevel::Disabled, EnforcementLevel::Disabled);
        let pack = builtin_pack(&cfg).expect("pack");
        let resource = ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, props).expect("non-empty type");

        prop_assert!(evaluate(&resource, &pack.policies).expect("no rule runs").is_empty());
    }

    #[test]
    fn evaluation_is_idempotent(
        props in arb_bucket_properties(),
        acl_level in arb_level(),
        prefix_level in arb_level(),
    ) {
        let cfg = config_with_levels(acl_level, prefix_level);
        let pack = builtin_pack(&cfg).expect("pack");
        let resource = ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, props).expect("non-empty type");

        let first = evaluate(&resource, &pack.policies).expect("evaluate");
        let second = evaluate(&resource, &pack.policies).expect("evaluate");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn violation_levels_match_configured_levels(
        props in arb_bucket_properties(),
        acl_level in arb_level(),
        prefix_level in arb_level(),
    ) {
        let cfg = config_with_levels(acl_level, prefix_level);
        let pack = builtin_pack(&cfg).expect("pack");
        let resource = ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, props).expect("non-empty type");

        for v in evaluate(&resource, &pack.policies).expect("evaluate") {
            prop_assert_ne!(v.enforcement_level, EnforcementLevel::Disabled);
            let expected = if v.rule_name == ids::RULE_S3_NO_PUBLIC_READ { acl_level } else { prefix_level };
            prop_assert_eq!(v.enforcement_level, expected);
        }
    }

    #[test]
    fn acl_rule_accepts_any_value(acl in arb_value()) {
        let cfg = config_with_levels(EnforcementLevel::Mandatory, EnforcementLevel::Disabled);
        let pack = builtin_pack(&cfg).expect("pack");
        let flagged = matches!(acl.as_str(), Some("public-read" | "public-read-write"));
        let mut props = Properties::new();
        props.insert("acl".to_string(), acl);
        let resource = ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, props).expect("non-empty type");

        let out = evaluate(&resource, &pack.policies).expect("acl never errors");
        prop_assert_eq!(out.len(), usize::from(flagged));
    }

    #[test]
    fn prefixed_names_always_pass(suffix in "[a-z0-9-]{0,24}") {
        let cfg = config_with_levels(EnforcementLevel::Disabled, EnforcementLevel::Mandatory);
        let pack = builtin_pack(&cfg).expect("pack");
        let mut props = Properties::new();
        props.insert("bucket".to_string(), Value::String(format!("logsbucket{suffix}")));
        let resource = ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, props).expect("non-empty type");

        prop_assert!(evaluate(&resource, &pack.policies).expect("evaluate").is_empty());
    }

    #[test]
    fn batch_totals_match_per_resource_evaluation(
        batch in prop::collection::vec(arb_bucket_properties(), 0..8),
    ) {
        let cfg = config_with_levels(EnforcementLevel::Mandatory, EnforcementLevel::Advisory);
        let pack = builtin_pack(&cfg).expect("pack");
        let resources: Vec<ResourceDescriptor> = batch
            .into_iter()
            .map(|p| ResourceDescriptor::new(ids::TYPE_AWS_S3_BUCKET, p).expect("non-empty type"))
            .collect();

        let expected: usize = resources
            .iter()
            .map(|r| evaluate(r, &pack.policies).expect("evaluate").len())
            .sum();
        let report = evaluate_resources(&resources, &cfg).expect("report");
        prop_assert_eq!(report.data.findings_total as usize, expected);
    }
}
