//! Stable DTOs and IDs used across the policyguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for violations and the emitted report
//! - stable rule names and resource type identifiers
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    EnforcementLevel, Finding, PolicyData, PolicyReport, ResourceRef, ToolMeta, Verdict,
    VerdictCounts, Violation, SCHEMA_REPORT_V1,
};
