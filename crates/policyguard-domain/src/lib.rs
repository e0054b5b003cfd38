//! Pure policy evaluation (no IO).
//!
//! Input: resource descriptors constructed elsewhere plus an effective config.
//! Output: violations, or findings + verdict + summary data for a batch.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_resources};
pub use error::PolicyError;
