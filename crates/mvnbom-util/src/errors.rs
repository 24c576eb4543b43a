use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mvnbom operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MvnbomError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The root pom.xml is missing or malformed. Fatal for the whole pass.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that pom.xml exists at the project root and is well-formed XML"))]
    Manifest { message: String },

    /// A submodule's pom.xml is missing or malformed. The submodule is
    /// skipped and siblings continue.
    #[error("Submodule '{name}' error: {message}")]
    Submodule { name: String, message: String },

    /// Invoking mvn, or reading its output back, failed. Callers may
    /// continue with a manifest-only module tree.
    #[error("Build tool error: {message}")]
    #[diagnostic(help("Check that mvn is on PATH and the project builds"))]
    Tool { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type MvnbomResult<T> = miette::Result<T>;
