//! Test utilities for taskhub-application
//!
//! Real in-memory providers plus cheap stand-ins for the crypto ports, so
//! use case tests run without key material or slow hashing.

pub mod fakes;

pub use fakes::*;
pub use fixtures::*;
