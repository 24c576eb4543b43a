//! Invocation of the external build tool.

use std::path::Path;

use mvnbom_util::errors::MvnbomError;
use mvnbom_util::process::{CommandBuilder, Pipeline};

/// The external dependency-resolution commands this extraction consumes.
///
/// Implementations own process invocation and output capture; the parsers
/// only ever see text.
pub trait BuildTool {
    /// Flat resolved-dependency listing, one `group:artifact:type:version`
    /// entry per line, normalized and deduplicated.
    fn dependency_list(&self, project_dir: &Path) -> Result<String, MvnbomError>;

    /// Transitive dependency graph in dot notation.
    fn dependency_graph(&self, project_dir: &Path) -> Result<String, MvnbomError>;
}

/// The real `mvn` command-line tool.
pub struct MavenCli;

impl BuildTool for MavenCli {
    /// Four-stage chain: run the offline listing, keep lines shaped like
    /// `group:artifact:type:version`, strip the `[INFO]` log prefixes, and
    /// sort unique. The chain's final stdout is the listing.
    fn dependency_list(&self, project_dir: &Path) -> Result<String, MvnbomError> {
        let dir = project_dir.to_string_lossy().to_string();
        Pipeline::new()
            .stage(
                CommandBuilder::new("mvn")
                    .args(["-o", "dependency:list"])
                    .cwd(dir),
            )
            .stage(CommandBuilder::new("grep").arg(":.*:.*:.*"))
            .stage(CommandBuilder::new("cut").args(["-d]", "-f2-"]))
            .stage(CommandBuilder::new("sort").arg("-u"))
            .capture()
    }

    /// `mvn dependency:tree` writes the dump to a file rather than stdout;
    /// give it a temp path and read the dump back.
    fn dependency_graph(&self, project_dir: &Path) -> Result<String, MvnbomError> {
        let out_file = tempfile::Builder::new()
            .prefix("mvnbom-tree-")
            .suffix(".txt")
            .tempfile()
            .map_err(|err| MvnbomError::Tool {
                message: format!("cannot create temp file for dependency tree: {err}"),
            })?;
        let out_path = out_file.path().to_path_buf();

        let output = CommandBuilder::new("mvn")
            .arg("dependency:tree")
            .arg("-DoutputType=dot")
            .arg("-DappendOutput=true")
            .arg(format!("-DoutputFile={}", out_path.display()))
            .cwd(project_dir.to_string_lossy().to_string())
            .exec()?;
        if !output.status.success() {
            return Err(MvnbomError::Tool {
                message: format!(
                    "mvn dependency:tree failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        std::fs::read_to_string(&out_path).map_err(|err| MvnbomError::Tool {
            message: format!("cannot read dependency tree output: {err}"),
        })
    }
}
