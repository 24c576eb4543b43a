//! The extraction pass: manifest, flat listing, submodules, graph merge.

use std::path::Path;

use mvnbom_pom::Project;
use mvnbom_util::errors::MvnbomError;

use crate::aggregate::submodule_modules;
use crate::list::undeclared_modules;
use crate::maven::BuildTool;
use crate::merge::merge_graph;
use crate::module::{module_from, root_module, ChecksumSource, LicenseSource, Module};
use crate::tree::parse_graph;

/// The result of one extraction pass: the module list (root first) plus
/// warnings for the degraded paths that were skipped rather than failed.
#[derive(Debug, Default)]
pub struct Extraction {
    pub modules: Vec<Module>,
    pub warnings: Vec<String>,
}

impl Extraction {
    /// The root module of the pass.
    pub fn root(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.root)
    }
}

/// Extract the full module tree for the project at `project_root`.
///
/// A missing or malformed root manifest is fatal. A failed submodule is
/// skipped and its siblings continue. A failed external-tool invocation
/// degrades to a warning on the result, leaving a manifest-derived tree.
pub fn extract_modules(
    project_root: &Path,
    tool: &dyn BuildTool,
    checksums: &dyn ChecksumSource,
    licenses: &dyn LicenseSource,
) -> Result<Extraction, MvnbomError> {
    let project = Project::from_path(&project_root.join("pom.xml"))?;

    let mut extraction = Extraction::default();
    let root = root_module(&project, project_root, checksums, licenses);
    extraction.modules.push(root);

    // Base set: everything the manifest itself declares, attached under the
    // root module and deduplicated by name (first occurrence wins).
    let declared = project
        .dependency_management
        .iter()
        .chain(project.dependencies.iter())
        .chain(project.plugins.iter())
        .chain(project.plugin_management.iter());
    for decl in declared {
        let module = module_from(
            &decl.artifact_id,
            decl.version.as_deref().unwrap_or_default(),
            &project,
            checksums,
        );
        attach_under_root(&mut extraction.modules, module);
    }

    // Dependencies the tool resolved that the manifest never declares.
    match tool.dependency_list(project_root) {
        Ok(listing) => {
            for module in undeclared_modules(&listing, &project, checksums) {
                attach_under_root(&mut extraction.modules, module);
            }
        }
        Err(err) => {
            tracing::warn!("dependency list unavailable: {err}");
            extraction
                .warnings
                .push(format!("dependency list unavailable: {err}"));
        }
    }

    // Submodules: one bad manifest never aborts the pass.
    for submodule in &project.modules {
        match submodule_modules(project_root, submodule, &project, checksums) {
            Ok(modules) => extraction.modules.extend(modules),
            Err(err) => {
                tracing::warn!("skipping submodule '{submodule}': {err}");
                continue;
            }
        }
    }

    // Transitive edges onto the combined set.
    match tool.dependency_graph(project_root) {
        Ok(dump) => {
            let adjacency = parse_graph(&dump);
            merge_graph(&mut extraction.modules, &adjacency);
        }
        Err(err) => {
            tracing::warn!("dependency graph unavailable: {err}");
            extraction
                .warnings
                .push(format!("dependency graph unavailable: {err}"));
        }
    }

    Ok(extraction)
}

/// Append a module to the flat set and attach a copy under the root, unless
/// a module of that name is already present.
fn attach_under_root(modules: &mut Vec<Module>, module: Module) {
    if modules.iter().any(|m| m.name == module.name) {
        return;
    }
    if let Some(root) = modules.first_mut() {
        root.modules.insert(module.name.clone(), module.clone());
    }
    modules.push(module);
}
