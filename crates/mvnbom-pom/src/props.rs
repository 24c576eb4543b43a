//! `${...}` placeholder resolution against a project's property table.
//!
//! Two call sites exist with different self-reference semantics: a name
//! placeholder whose key starts with `project` refers to the enclosing
//! (parent) project's artifact id, while a version placeholder always goes
//! through the property table. A key missing from the table resolves to the
//! empty string, never an error, because manifests routinely declare unused
//! or externally-injected properties.

use crate::pom::Project;

/// The alias denoting "the enclosing project" (`${project.version}` etc.).
const SELF_REFERENCE: &str = "project";

/// Whether a raw string is a `${...}` placeholder expression.
pub fn is_placeholder(raw: &str) -> bool {
    raw.starts_with("${")
}

/// Strip the `${` / `}` delimiters to obtain the property key.
fn placeholder_key(raw: &str) -> &str {
    raw.trim_start_matches("${").trim_end_matches('}')
}

/// Resolve a module name expression.
///
/// Non-placeholder strings are returned unchanged. A self-reference yields
/// the parent reference's artifact id; anything else is looked up in the
/// property table.
pub fn resolve_name(raw: &str, project: &Project) -> String {
    if !is_placeholder(raw) {
        return raw.to_string();
    }
    let key = placeholder_key(raw);
    if key.starts_with(SELF_REFERENCE) {
        return project
            .parent
            .as_ref()
            .map(|p| p.artifact_id.clone())
            .unwrap_or_default();
    }
    lookup(project, key)
}

/// Resolve a version expression.
///
/// Non-placeholder strings are returned unchanged; placeholders go through
/// the property table only.
pub fn resolve_version(raw: &str, project: &Project) -> String {
    if !is_placeholder(raw) {
        return raw.to_string();
    }
    lookup(project, placeholder_key(raw))
}

fn lookup(project: &Project, key: &str) -> String {
    match project.properties.get(key) {
        Some(value) => value.clone(),
        None => {
            tracing::debug!("property '{key}' not declared, resolving to empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::ParentRef;

    fn project_with_props(entries: &[(&str, &str)]) -> Project {
        let mut project = Project::default();
        for (k, v) in entries {
            project.properties.insert(k.to_string(), v.to_string());
        }
        project
    }

    #[test]
    fn plain_string_passes_through() {
        let project = Project::default();
        assert_eq!(resolve_version("1.2.3", &project), "1.2.3");
        assert_eq!(resolve_name("my-lib", &project), "my-lib");
    }

    #[test]
    fn defined_property_resolves_exactly() {
        let project = project_with_props(&[("foo.version", "1.2.3")]);
        assert_eq!(resolve_version("${foo.version}", &project), "1.2.3");
    }

    #[test]
    fn undefined_property_resolves_to_empty() {
        let project = Project::default();
        assert_eq!(resolve_version("${missing.version}", &project), "");
        assert_eq!(resolve_name("${missing.name}", &project), "");
    }

    #[test]
    fn name_self_reference_yields_parent_artifact_id() {
        let mut project = Project::default();
        project.parent = Some(ParentRef {
            group_id: "org.example".to_string(),
            artifact_id: "parent-artifact".to_string(),
            version: "2.0".to_string(),
            relative_path: None,
        });
        assert_eq!(resolve_name("${project.name}", &project), "parent-artifact");
        assert_eq!(
            resolve_name("${project.artifactId}", &project),
            "parent-artifact"
        );
    }

    #[test]
    fn name_self_reference_without_parent_is_empty() {
        let project = Project::default();
        assert_eq!(resolve_name("${project.name}", &project), "");
    }

    #[test]
    fn version_self_reference_uses_property_table_only() {
        let mut project = project_with_props(&[("project.version", "7.0")]);
        project.parent = Some(ParentRef {
            group_id: "g".to_string(),
            artifact_id: "a".to_string(),
            version: "1.0".to_string(),
            relative_path: None,
        });
        // Version resolution never consults the parent reference.
        assert_eq!(resolve_version("${project.version}", &project), "7.0");
    }
}
