//! Shared test utilities for the IAM SDK crates.
//!
//! This crate provides:
//! - Proptest generators for resource names and API addressing
//! - Wiremock helpers for standing up a fake IAM API server
//! - Test fixtures with sample resources and iamconfig files

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
pub mod mocks;
pub mod fixtures;

pub use generators::*;
