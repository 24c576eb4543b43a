//! Shared utilities for mvnbom.
//!
//! This crate provides cross-cutting concerns used by the other mvnbom
//! crates: error types, process spawning, multi-stage pipeline capture,
//! and cryptographic hashing.

pub mod errors;
pub mod hash;
pub mod process;
