//! POM file parsing: project coordinates, properties, dependency and plugin
//! declarations, submodule references, developers.

use std::collections::BTreeMap;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use mvnbom_util::errors::MvnbomError;

/// A parsed POM (Project Object Model) file.
///
/// Immutable once parsed; lives for the duration of one extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,

    pub parent: Option<ParentRef>,
    pub properties: BTreeMap<String, String>,
    pub dependencies: Vec<Declaration>,
    pub dependency_management: Vec<Declaration>,
    pub plugins: Vec<Declaration>,
    pub plugin_management: Vec<Declaration>,
    pub modules: Vec<String>,
    pub developers: Vec<Developer>,
}

/// Reference to a parent POM.
#[derive(Debug, Clone)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub relative_path: Option<String>,
}

/// A dependency or plugin declared in a POM file.
#[derive(Debug, Clone, Default)]
pub struct Declaration {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

/// A developer entry from the POM's `<developers>` section.
#[derive(Debug, Clone, Default)]
pub struct Developer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

impl Project {
    /// Load and parse a `pom.xml` from disk.
    pub fn from_path(path: &Path) -> Result<Self, MvnbomError> {
        let xml = std::fs::read_to_string(path).map_err(|err| MvnbomError::Manifest {
            message: format!("cannot read {}: {err}", path.display()),
        })?;
        parse_project(&xml)
    }

    /// Effective version (falls back to the parent reference).
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or(self.parent.as_ref().map(|p| p.version.as_str()))
    }

    /// Whether an artifact id appears among the direct dependencies or the
    /// dependency-management section.
    pub fn declares_dependency(&self, artifact_id: &str) -> bool {
        find_declaration(&self.dependencies, artifact_id).is_some()
            || find_declaration(&self.dependency_management, artifact_id).is_some()
    }

    /// Whether an artifact id appears among the build plugins or the
    /// plugin-management section.
    pub fn declares_plugin(&self, artifact_id: &str) -> bool {
        find_declaration(&self.plugins, artifact_id).is_some()
            || find_declaration(&self.plugin_management, artifact_id).is_some()
    }
}

/// Find a declaration by artifact id.
pub fn find_declaration<'a>(slice: &'a [Declaration], artifact_id: &str) -> Option<&'a Declaration> {
    slice.iter().find(|d| d.artifact_id == artifact_id)
}

/// Which list a declaration accumulator belongs to.
#[derive(Clone, Copy)]
enum Bucket {
    Dependency,
    DependencyManagement,
    Plugin,
    PluginManagement,
}

/// Parse a POM XML string into a [`Project`].
pub fn parse_project(xml: &str) -> Result<Project, MvnbomError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut project = Project::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    // Temporary accumulators for nested elements
    let mut current_decl: Option<(Declaration, Bucket, String)> = None;
    let mut current_parent: Option<ParentRef> = None;
    let mut current_dev: Option<Developer> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                path.push(tag);
                text_buf.clear();

                let ctx = path_context(&path);
                match ctx.as_str() {
                    "project>dependencies>dependency" => {
                        current_decl = Some((Declaration::default(), Bucket::Dependency, ctx));
                    }
                    "project>dependencyManagement>dependencies>dependency" => {
                        current_decl =
                            Some((Declaration::default(), Bucket::DependencyManagement, ctx));
                    }
                    "project>build>plugins>plugin" => {
                        current_decl = Some((Declaration::default(), Bucket::Plugin, ctx));
                    }
                    "project>build>pluginManagement>plugins>plugin" => {
                        current_decl = Some((Declaration::default(), Bucket::PluginManagement, ctx));
                    }
                    "project>parent" => {
                        current_parent = Some(ParentRef {
                            group_id: String::new(),
                            artifact_id: String::new(),
                            version: String::new(),
                            relative_path: None,
                        });
                    }
                    "project>developers>developer" => {
                        current_dev = Some(Developer::default());
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path_context(&path);
                let depth = path.len();

                // Properties: <project><properties><key>value</key></properties>
                if depth == 3 && path.get(1).map(|s| s.as_str()) == Some("properties") {
                    let prop_name = path.last().cloned().unwrap_or_default();
                    project.properties.insert(prop_name, text_buf.clone());
                }

                // Dependency/plugin fields. Matching against the stored
                // declaration context keeps nested <configuration> blocks
                // inside plugins from being mistaken for coordinates.
                if let Some((decl, _, decl_ctx)) = current_decl.as_mut() {
                    if let Some(field) = ctx.strip_prefix(decl_ctx.as_str()) {
                        match field {
                            ">groupId" => decl.group_id = text_buf.clone(),
                            ">artifactId" => decl.artifact_id = text_buf.clone(),
                            ">version" => decl.version = Some(text_buf.clone()),
                            ">scope" => decl.scope = Some(text_buf.clone()),
                            _ => {}
                        }
                    }
                }
                if current_decl
                    .as_ref()
                    .is_some_and(|(_, _, decl_ctx)| *decl_ctx == ctx)
                {
                    if let Some((decl, bucket, _)) = current_decl.take() {
                        let list = match bucket {
                            Bucket::Dependency => &mut project.dependencies,
                            Bucket::DependencyManagement => &mut project.dependency_management,
                            Bucket::Plugin => &mut project.plugins,
                            Bucket::PluginManagement => &mut project.plugin_management,
                        };
                        list.push(decl);
                    }
                }

                // Parent fields
                if let Some(ref mut parent) = current_parent {
                    match ctx.as_str() {
                        "project>parent>groupId" => parent.group_id = text_buf.clone(),
                        "project>parent>artifactId" => parent.artifact_id = text_buf.clone(),
                        "project>parent>version" => parent.version = text_buf.clone(),
                        "project>parent>relativePath" => {
                            parent.relative_path = Some(text_buf.clone());
                        }
                        _ => {}
                    }
                    if ctx == "project>parent" {
                        project.parent = current_parent.take();
                    }
                }

                // Developer fields
                if let Some(ref mut dev) = current_dev {
                    match ctx.as_str() {
                        "project>developers>developer>name" => dev.name = Some(text_buf.clone()),
                        "project>developers>developer>email" => dev.email = Some(text_buf.clone()),
                        "project>developers>developer>organization" => {
                            dev.organization = Some(text_buf.clone());
                        }
                        _ => {}
                    }
                    if ctx == "project>developers>developer" {
                        if let Some(dev) = current_dev.take() {
                            project.developers.push(dev);
                        }
                    }
                }

                // Top-level project fields
                if depth == 2 {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") => project.group_id = Some(text_buf.clone()),
                        Some("artifactId") => project.artifact_id = Some(text_buf.clone()),
                        Some("version") => project.version = Some(text_buf.clone()),
                        Some("name") => project.name = Some(text_buf.clone()),
                        Some("url") => project.url = Some(text_buf.clone()),
                        _ => {}
                    }
                }

                // Submodule references
                if ctx == "project>modules>module" {
                    project.modules.push(text_buf.clone());
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(MvnbomError::Manifest {
                    message: format!("failed to parse POM XML: {err}"),
                });
            }
            _ => {}
        }
    }

    Ok(project)
}

/// Build a context string from the current XML path for matching.
fn path_context(path: &[String]) -> String {
    path.join(">")
}
