//! Folding a multi-module project's child manifests into the module set.

use std::path::Path;

use mvnbom_pom::Project;
use mvnbom_util::errors::MvnbomError;

use crate::module::{module_from, ChecksumSource, Module};

/// Load a submodule's `pom.xml` and produce its module list: the submodule's
/// own module first, followed by one module for every dependency or plugin
/// the submodule declares that the parent does not (neither directly nor in
/// its management sections). Extras are also attached as children of the
/// submodule's own module.
///
/// A missing or malformed submodule manifest is reported to the caller,
/// which skips this submodule and continues with its siblings.
pub fn submodule_modules(
    project_root: &Path,
    module_name: &str,
    parent: &Project,
    checksums: &dyn ChecksumSource,
) -> Result<Vec<Module>, MvnbomError> {
    let pom_path = project_root.join(module_name).join("pom.xml");
    let project = Project::from_path(&pom_path).map_err(|err| MvnbomError::Submodule {
        name: module_name.to_string(),
        message: err.to_string(),
    })?;

    // The submodule's own version falls back to the parent project's.
    let raw_version = project
        .version
        .clone()
        .filter(|v| !v.is_empty())
        .or_else(|| parent.version.clone())
        .unwrap_or_default();
    let own_name = project
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| project.artifact_id.clone())
        .unwrap_or_default();
    let mut own = module_from(&own_name, &raw_version, &project, checksums);

    let mut extras: Vec<Module> = Vec::new();

    for dep in &project.dependencies {
        if parent.declares_dependency(&dep.artifact_id) {
            continue;
        }
        push_extra(&mut extras, &dep.artifact_id, dep.version.as_deref(), &project, checksums);
    }

    for plugin in &project.plugins {
        if parent.declares_plugin(&plugin.artifact_id) {
            continue;
        }
        push_extra(
            &mut extras,
            &plugin.artifact_id,
            plugin.version.as_deref(),
            &project,
            checksums,
        );
    }

    for extra in &extras {
        own.modules.insert(extra.name.clone(), extra.clone());
    }

    let mut result = Vec::with_capacity(extras.len() + 1);
    result.push(own);
    result.extend(extras);
    Ok(result)
}

/// Deduplicate by name before attachment: a dependency and a plugin with
/// the same artifact id produce a single extra.
fn push_extra(
    extras: &mut Vec<Module>,
    artifact_id: &str,
    version: Option<&str>,
    project: &Project,
    checksums: &dyn ChecksumSource,
) {
    let module = module_from(artifact_id, version.unwrap_or_default(), project, checksums);
    if extras.iter().any(|m| m.name == module.name) {
        return;
    }
    extras.push(module);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::NoChecksum;
    use mvnbom_pom::pom::parse_project;

    const PARENT_POM: &str = r#"<project>
        <groupId>org.example</groupId>
        <artifactId>aggregator</artifactId>
        <version>3.1.4</version>
        <dependencies>
            <dependency>
                <groupId>junit</groupId>
                <artifactId>junit</artifactId>
                <version>4.13.2</version>
            </dependency>
        </dependencies>
        <dependencyManagement>
            <dependencies>
                <dependency>
                    <groupId>com.google.guava</groupId>
                    <artifactId>guava</artifactId>
                    <version>32.0.0-jre</version>
                </dependency>
            </dependencies>
        </dependencyManagement>
    </project>"#;

    fn write_submodule(root: &Path, name: &str, pom: &str) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("pom.xml"), pom).unwrap();
    }

    #[test]
    fn submodule_extras_skip_parent_declarations() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parent = parse_project(PARENT_POM).unwrap();
        write_submodule(
            tmp.path(),
            "core",
            r#"<project>
                <artifactId>core</artifactId>
                <version>1.0</version>
                <dependencies>
                    <dependency>
                        <groupId>junit</groupId>
                        <artifactId>junit</artifactId>
                        <version>4.13.2</version>
                    </dependency>
                    <dependency>
                        <groupId>com.google.guava</groupId>
                        <artifactId>guava</artifactId>
                    </dependency>
                    <dependency>
                        <groupId>org.slf4j</groupId>
                        <artifactId>slf4j-api</artifactId>
                        <version>2.0.13</version>
                    </dependency>
                </dependencies>
            </project>"#,
        );

        let modules =
            submodule_modules(tmp.path(), "core", &parent, &NoChecksum).unwrap();
        // Own module + only the dependency the parent does not declare.
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name, "core");
        assert_eq!(modules[1].name, "slf4j-api");
        assert_eq!(modules[1].version, "2.0.13");
        assert!(modules[0].modules.contains_key("slf4j-api"));
        assert!(!modules[0].modules.contains_key("junit"));
    }

    #[test]
    fn submodule_version_falls_back_to_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parent = parse_project(PARENT_POM).unwrap();
        write_submodule(
            tmp.path(),
            "web",
            r#"<project><artifactId>web</artifactId></project>"#,
        );

        let modules = submodule_modules(tmp.path(), "web", &parent, &NoChecksum).unwrap();
        assert_eq!(modules[0].name, "web");
        assert_eq!(modules[0].version, "3.1.4");
    }

    #[test]
    fn plugin_extras_use_plugin_management_for_dedup() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parent = parse_project(
            r#"<project>
                <artifactId>aggregator</artifactId>
                <version>1.0</version>
                <build>
                    <pluginManagement>
                        <plugins>
                            <plugin>
                                <groupId>org.apache.maven.plugins</groupId>
                                <artifactId>maven-surefire-plugin</artifactId>
                                <version>3.2.5</version>
                            </plugin>
                        </plugins>
                    </pluginManagement>
                </build>
            </project>"#,
        )
        .unwrap();
        write_submodule(
            tmp.path(),
            "core",
            r#"<project>
                <artifactId>core</artifactId>
                <version>1.0</version>
                <build>
                    <plugins>
                        <plugin>
                            <groupId>org.apache.maven.plugins</groupId>
                            <artifactId>maven-surefire-plugin</artifactId>
                        </plugin>
                        <plugin>
                            <groupId>org.apache.maven.plugins</groupId>
                            <artifactId>maven-shade-plugin</artifactId>
                            <version>3.5.0</version>
                        </plugin>
                    </plugins>
                </build>
            </project>"#,
        );

        let modules = submodule_modules(tmp.path(), "core", &parent, &NoChecksum).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[1].name, "maven-shade-plugin");
    }

    #[test]
    fn missing_submodule_manifest_is_reported() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parent = parse_project(PARENT_POM).unwrap();
        let err = submodule_modules(tmp.path(), "ghost", &parent, &NoChecksum).unwrap_err();
        assert!(matches!(err, MvnbomError::Submodule { .. }));
    }

    #[test]
    fn duplicate_extra_names_deduplicated() {
        let tmp = tempfile::TempDir::new().unwrap();
        let parent = parse_project(
            r#"<project><artifactId>aggregator</artifactId><version>1.0</version></project>"#,
        )
        .unwrap();
        write_submodule(
            tmp.path(),
            "core",
            r#"<project>
                <artifactId>core</artifactId>
                <version>1.0</version>
                <dependencies>
                    <dependency>
                        <groupId>a</groupId>
                        <artifactId>shared</artifactId>
                        <version>1.0</version>
                    </dependency>
                </dependencies>
                <build>
                    <plugins>
                        <plugin>
                            <groupId>b</groupId>
                            <artifactId>shared</artifactId>
                            <version>2.0</version>
                        </plugin>
                    </plugins>
                </build>
            </project>"#,
        );

        let modules = submodule_modules(tmp.path(), "core", &parent, &NoChecksum).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[1].version, "1.0");
    }
}
