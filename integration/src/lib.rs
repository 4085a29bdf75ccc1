//! Integration test crate for the IAM SDK.
//!
//! All the content lives under `tests/`; this library target exists so the
//! package builds on its own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
