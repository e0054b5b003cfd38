//! Use case orchestration for policyguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;

pub use check::{parse_resources_json, run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report};
