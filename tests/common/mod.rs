//! Shared helpers for doxbuild integration tests.

pub mod env;

#[allow(unused_imports)]
pub use env::{TestEnv, TestResult};
