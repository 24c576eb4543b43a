//! Module tree extraction for Maven projects.
//!
//! Reconciles three sources into one deduplicated module tree: the `pom.xml`
//! manifest (with property indirection), the flat `mvn dependency:list`
//! output, and the `mvn dependency:tree` dot-format dump. The resulting tree
//! is handed to an SBOM document assembler; license detection and checksum
//! computation are pluggable collaborators behind the [`module::LicenseSource`]
//! and [`module::ChecksumSource`] seams.

pub mod aggregate;
pub mod extract;
pub mod list;
pub mod maven;
pub mod merge;
pub mod module;
pub mod tree;

pub use extract::{extract_modules, Extraction};
pub use maven::{BuildTool, MavenCli};
pub use module::{Module, NoChecksum, NoLicense, Sha1NameChecksum};
pub use tree::AdjacencyMap;
