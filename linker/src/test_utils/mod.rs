//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are plain in-memory implementations of the ports that record
//! every call, so tests can assert on what the services asked for and what
//! they created.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
