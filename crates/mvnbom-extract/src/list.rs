//! Parsing the flat `mvn dependency:list` output and reconciling it against
//! manifest-declared dependencies.

use mvnbom_pom::Project;

use crate::module::{module_from, ChecksumSource, Module};

/// Parse the line-oriented flat listing into artifact/version pairs.
///
/// Lines are colon-separated `group:artifact:type:version[:scope]`; field 1
/// is the artifact id and field 3 the resolved version. The listing is
/// terminated by one blank line and one summary line, both excluded.
/// Malformed lines are skipped, never fatal.
pub fn parse_resolved_list(text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines.len().saturating_sub(2);

    let mut pairs = Vec::new();
    for line in &lines[..end] {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 4 {
            tracing::debug!("skipping malformed listing line: {line:?}");
            continue;
        }
        let artifact = fields[1].trim();
        let version = fields[3].trim();
        if artifact.is_empty() {
            tracing::debug!("skipping listing line with empty artifact: {line:?}");
            continue;
        }
        pairs.push((artifact.to_string(), version.to_string()));
    }
    pairs
}

/// One module per listing entry whose artifact id the manifest does not
/// already declare, directly or via dependency management.
///
/// This recovers dependencies the build tool resolved transitively that the
/// manifest never names (inherited from parent POMs, BOM imports).
pub fn undeclared_modules(
    listing: &str,
    project: &Project,
    checksums: &dyn ChecksumSource,
) -> Vec<Module> {
    parse_resolved_list(listing)
        .into_iter()
        .filter(|(artifact, _)| !project.declares_dependency(artifact))
        .map(|(artifact, version)| module_from(&artifact, &version, project, checksums))
        .collect()
}
