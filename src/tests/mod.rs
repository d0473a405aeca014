//! Internal test modules: whitebox tests with crate access.


// Harness-based acceptance tests
mod acceptance_browse;
