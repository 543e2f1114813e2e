//! Test doubles and fixtures shared by unit tests, integration tests,
//! and benchmarks.

pub mod fixtures;
pub mod mocks;

pub use mocks::MockGenerator;
