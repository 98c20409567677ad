//! Shared test utilities for snmp-query integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod fakes;
mod fixtures;

pub use fakes::*;
pub use fixtures::*;
