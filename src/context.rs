//! Project context resolution for trellis.
//!
//! This module provides the "environment resolution" layer that decides what
//! kind of project the current working directory belongs to and where that
//! project's entities live.
//!
//! Project kinds are detected by walking upward from a start directory to the
//! nearest directory containing the kind's marker file: `deployment.yaml`
//! marks a deployment root, `location.yaml` marks a code location root. Both
//! markers are created by the shipped templates, so detection stays a pure
//! file-existence check.
//!
//! Contexts are recomputed fresh on every command invocation and are
//! read-only after construction.

use crate::error::{Result, TrellisError};
use crate::registry::{ComponentRegistry, ComponentType};
use std::path::{Path, PathBuf};

/// Marker file identifying a deployment project root.
pub const DEPLOYMENT_MARKER: &str = "deployment.yaml";

/// Marker file identifying a code location project root.
pub const CODE_LOCATION_MARKER: &str = "location.yaml";

/// Directory under a deployment root holding code locations.
pub const CODE_LOCATIONS_DIR: &str = "code_locations";

/// Directory under a code location root holding component types.
pub const COMPONENT_TYPES_DIR: &str = "component_types";

/// Directory under a code location root holding component instances.
pub const COMPONENT_INSTANCES_DIR: &str = "components";

/// Walk from `start` upward to the nearest directory containing `marker`.
fn find_root_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(marker).is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Whether `path` is inside a deployment project.
pub fn is_inside_deployment_project<P: AsRef<Path>>(path: P) -> bool {
    find_root_with_marker(path.as_ref(), DEPLOYMENT_MARKER).is_some()
}

/// Whether `path` is inside a code location project.
pub fn is_inside_code_location_project<P: AsRef<Path>>(path: P) -> bool {
    find_root_with_marker(path.as_ref(), CODE_LOCATION_MARKER).is_some()
}

/// Resolved view over a deployment project root.
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    root: PathBuf,
}

impl DeploymentContext {
    /// Resolve the enclosing deployment project from `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = find_root_with_marker(path.as_ref(), DEPLOYMENT_MARKER).ok_or_else(|| {
            TrellisError::NotInExpectedContext(
                "this command must be run inside a trellis deployment project.".to_string(),
            )
        })?;
        Ok(Self { root })
    }

    /// Absolute path of the deployment root.
    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Directory where code locations are generated.
    pub fn code_location_root_path(&self) -> PathBuf {
        self.root.join(CODE_LOCATIONS_DIR)
    }

    /// Whether a code location with the given name already exists.
    pub fn has_code_location(&self, name: &str) -> bool {
        self.code_location_root_path().join(name).exists()
    }
}

/// Resolved view over a code location project root.
///
/// Carries a borrowed component registry so component type lookups go through
/// the explicitly constructed table rather than any process-wide state.
#[derive(Debug)]
pub struct CodeLocationContext<'a> {
    root: PathBuf,
    registry: &'a ComponentRegistry,
}

impl<'a> CodeLocationContext<'a> {
    /// Resolve the enclosing code location project from `path`.
    pub fn from_path<P: AsRef<Path>>(path: P, registry: &'a ComponentRegistry) -> Result<Self> {
        let root = find_root_with_marker(path.as_ref(), CODE_LOCATION_MARKER).ok_or_else(|| {
            TrellisError::NotInExpectedContext(
                "this command must be run inside a trellis code location project.".to_string(),
            )
        })?;
        Ok(Self { root, registry })
    }

    /// Absolute path of the code location root.
    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Directory where component types are generated.
    pub fn component_types_root_path(&self) -> PathBuf {
        self.root.join(COMPONENT_TYPES_DIR)
    }

    /// Directory where component instances are generated.
    pub fn component_instances_root_path(&self) -> PathBuf {
        self.root.join(COMPONENT_INSTANCES_DIR)
    }

    /// Whether a component type with the given name is already taken, either
    /// by a registry entry or by a generated type directory on disk.
    pub fn has_component_type(&self, name: &str) -> bool {
        self.registry.has(name) || self.component_types_root_path().join(name).exists()
    }

    /// Whether a component instance with the given name already exists.
    pub fn has_component_instance(&self, name: &str) -> bool {
        self.component_instances_root_path().join(name).exists()
    }

    /// Look up a registered component type by key.
    pub fn get_component_type(&self, name: &str) -> Result<&'a dyn ComponentType> {
        self.registry.get(name).ok_or_else(|| {
            TrellisError::UnknownComponentType(format!(
                "no component type `{}` could be resolved.",
                name
            ))
        })
    }
}
