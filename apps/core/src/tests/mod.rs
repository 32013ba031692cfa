//! Test Module
//!
//! Cross-module test suites. Unit tests live next to the code they cover.
//!
//! ## Test Categories
//! - `brain_tests`: End-to-end behavior of the answer pipeline
//! - `integration_tests`: HTTP routes against in-memory and mocked upstreams
