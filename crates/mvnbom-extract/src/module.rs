//! The normalized output record and its construction from raw manifest
//! identifiers.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use mvnbom_pom::{props, Developer, Project};
use mvnbom_util::hash::sha1_bytes;

/// One package/dependency/plugin node in the final tree.
///
/// Child ownership is exclusive: a child appears under exactly one parent
/// map entry, and attachment always copies by value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Module {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_declared: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_concluded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_comments: Option<String>,
    /// Exactly one module per extraction pass carries this flag.
    pub root: bool,
    /// Owned children, keyed by module name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub modules: BTreeMap<String, Module>,
}

/// A checksum attached to a module.
#[derive(Debug, Clone, Serialize)]
pub struct Checksum {
    pub algorithm: String,
    pub value: String,
}

/// Package supplier information, from the POM's first declared developer.
#[derive(Debug, Clone, Serialize)]
pub struct Supplier {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information produced by an external detector.
#[derive(Debug, Clone, Default)]
pub struct LicenseInfo {
    pub declared: Option<String>,
    pub concluded: Option<String>,
    pub copyright: Option<String>,
    pub comments: Option<String>,
}

/// Provides checksums for modules, keyed by sanitized name. Absence of a
/// checksum is not an error.
pub trait ChecksumSource {
    fn checksum(&self, name: &str) -> Option<Checksum>;
}

/// Default provider: SHA-1 over the module name.
pub struct Sha1NameChecksum;

impl ChecksumSource for Sha1NameChecksum {
    fn checksum(&self, name: &str) -> Option<Checksum> {
        Some(Checksum {
            algorithm: "SHA-1".to_string(),
            value: sha1_bytes(name.as_bytes()),
        })
    }
}

/// Detects license information for a project directory. Detection itself is
/// an external concern; implementations wrap whatever detector is in use.
pub trait LicenseSource {
    fn project_license(&self, dir: &Path) -> Option<LicenseInfo>;
}

/// License source that never reports anything.
pub struct NoLicense;

impl LicenseSource for NoLicense {
    fn project_license(&self, _dir: &Path) -> Option<LicenseInfo> {
        None
    }
}

/// Checksum source that never reports anything.
pub struct NoChecksum;

impl ChecksumSource for NoChecksum {
    fn checksum(&self, _name: &str) -> Option<Checksum> {
        None
    }
}

/// Sanitize a raw identifier into a module name: take the slash basename
/// (identifiers are sometimes supplied as paths) and replace spaces.
pub fn sanitize_name(raw: &str) -> String {
    let base = raw.rsplit('/').next().unwrap_or(raw);
    base.replace(' ', "-")
}

/// Construct a module from raw manifest identifiers.
///
/// The version is resolved through the property table when it is a
/// placeholder; an empty result is permitted and never aborts construction.
pub fn module_from(
    raw_name: &str,
    raw_version: &str,
    project: &Project,
    checksums: &dyn ChecksumSource,
) -> Module {
    let name = sanitize_name(raw_name);
    let version = props::resolve_version(raw_version, project);
    Module {
        checksum: checksums.checksum(&name),
        name,
        version,
        ..Module::default()
    }
}

/// Construct the root module for a parsed project.
///
/// Carries supplier info, home page, and license fields in addition to the
/// coordinates; flagged as the root of the pass.
pub fn root_module(
    project: &Project,
    project_dir: &Path,
    checksums: &dyn ChecksumSource,
    licenses: &dyn LicenseSource,
) -> Module {
    let raw_name = match project.name.as_deref().filter(|s| !s.is_empty()) {
        Some(name) => props::resolve_name(name, project),
        None => project.artifact_id.clone().unwrap_or_default(),
    };
    let name = raw_name.replace(' ', "-");
    let version =
        props::resolve_version(project.version.as_deref().unwrap_or_default(), project);

    let mut module = Module {
        checksum: checksums.checksum(&name),
        name,
        version,
        supplier: supplier_from(&project.developers),
        home_page: project.url.clone().filter(|u| !u.is_empty()),
        root: true,
        ..Module::default()
    };

    if let Some(license) = licenses.project_license(project_dir) {
        module.license_declared = license.declared;
        module.license_concluded = license.concluded;
        module.copyright = license.copyright;
        module.license_comments = license.comments;
    }

    module
}

/// Supplier from the first declared developer, if any.
///
/// A developer with a name is a person; a declared organization overrides
/// the supplier type.
fn supplier_from(developers: &[Developer]) -> Option<Supplier> {
    let dev = developers.first()?;
    let name = dev.name.clone().filter(|n| !n.is_empty())?;
    let kind = if dev.organization.as_deref().is_some_and(|o| !o.is_empty()) {
        "Organization"
    } else {
        "Person"
    };
    Some(Supplier {
        kind: kind.to_string(),
        name,
        email: dev.email.clone().filter(|e| !e.is_empty()),
    })
}
