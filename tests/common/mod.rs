//! Common utilities for integration tests

pub mod test_helpers;
