//! Integration test utilities for the banner service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, including multipart upload plumbing and admin
//! account provisioning.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
