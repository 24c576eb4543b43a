//! Command: extract the module tree and emit it as JSON.

use miette::Result;

use mvnbom_util::errors::MvnbomError;

/// Extract and print the module list (root first) as JSON.
pub fn exec(path: &str, manifest_only: bool, pretty: bool) -> Result<()> {
    let extraction = super::run_extraction(path, manifest_only)?;

    let json = if pretty {
        serde_json::to_string_pretty(&extraction.modules)
    } else {
        serde_json::to_string(&extraction.modules)
    }
    .map_err(|err| MvnbomError::Generic {
        message: format!("failed to serialize module tree: {err}"),
    })?;

    println!("{json}");
    Ok(())
}
