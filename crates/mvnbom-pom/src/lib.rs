//! POM manifest model and parser.
//!
//! This crate turns a `pom.xml` into an immutable [`pom::Project`] and
//! resolves `${...}` placeholder expressions against the project's property
//! table. It performs no I/O beyond reading the manifest file and is free of
//! network access by design.

pub mod pom;
pub mod props;

pub use pom::{Declaration, Developer, ParentRef, Project};
