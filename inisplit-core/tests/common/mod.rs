//! Test infrastructure for the inisplit parser
//!
//! Provides fixture loading, stochastic document generation, and assertion helpers.

#![allow(dead_code)]

mod generators;

pub use loader::{TestCase, Expectation, load_fixtures_by_name};
pub use harness::{run_test, run_with_variations};
pub use generators::{Gen, Model};
