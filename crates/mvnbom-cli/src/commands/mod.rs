//! Command dispatch and handler modules.

mod scan;
mod tree;

use std::path::Path;

use miette::Result;

use mvnbom_extract::maven::BuildTool;
use mvnbom_extract::{extract_modules, Extraction, MavenCli, NoLicense, Sha1NameChecksum};
use mvnbom_util::errors::MvnbomError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan {
            path,
            manifest_only,
            pretty,
        } => scan::exec(&path, manifest_only, pretty),
        Command::Tree {
            path,
            manifest_only,
        } => tree::exec(&path, manifest_only),
    }
}

/// Build tool stand-in for `--manifest-only`: both listings come back empty,
/// so the tree contains exactly what the manifests declare.
struct NoTool;

impl BuildTool for NoTool {
    fn dependency_list(&self, _project_dir: &Path) -> Result<String, MvnbomError> {
        Ok(String::new())
    }

    fn dependency_graph(&self, _project_dir: &Path) -> Result<String, MvnbomError> {
        Ok(String::new())
    }
}

/// Run one extraction pass for a project root.
pub(crate) fn run_extraction(path: &str, manifest_only: bool) -> Result<Extraction> {
    let root = Path::new(path);
    let extraction = if manifest_only {
        extract_modules(root, &NoTool, &Sha1NameChecksum, &NoLicense)?
    } else {
        extract_modules(root, &MavenCli, &Sha1NameChecksum, &NoLicense)?
    };
    for warning in &extraction.warnings {
        tracing::warn!("{warning}");
    }
    Ok(extraction)
}
