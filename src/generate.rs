//! Generators for the four project entity kinds.
//!
//! Each generator resolves the template tree for its entity kind, hands the
//! kind-specific placeholder substitutions to the template copier, and, for
//! component instances, runs the component type's file hook before emitting
//! the descriptor. Callers are responsible for precondition checks; the
//! copier's own destination check is the last line of defense.

use crate::descriptor::{emit_descriptor, ComponentDescriptor, COMPONENT_DESCRIPTOR_FILE};
use crate::error::{Result, TrellisError};
use crate::fs::Workdir;
use crate::registry::ComponentType;
use crate::scaffold::{
    self, CODE_LOCATION_NAME_PLACEHOLDER, COMPONENT_INSTANCE_NAME_PLACEHOLDER,
    COMPONENT_TYPE_CLASS_NAME_PLACEHOLDER, COMPONENT_TYPE_KEY_PLACEHOLDER,
    COMPONENT_TYPE_NAME_PLACEHOLDER, COMPONENT_TYPE_TEMPLATE, DEPLOYMENT_NAME_PLACEHOLDER,
};
use serde_json::Value;
use std::path::Path;

/// Camel-case a kebab or snake case name (`file-watcher` -> `FileWatcher`).
pub fn camel_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn project_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            TrellisError::Io(format!(
                "cannot derive a project name from '{}'",
                path.display()
            ))
        })
}

/// Generate a deployment skeleton at `path`.
pub fn generate_deployment(path: &Path) -> Result<()> {
    println!("Creating a deployment at {}.", path.display());

    let name = project_name(path)?;
    let template = scaffold::templates_root()?.join(DEPLOYMENT_NAME_PLACEHOLDER);
    scaffold::copy_template(path, &template, &[(DEPLOYMENT_NAME_PLACEHOLDER, name.as_str())])
}

/// Generate a code location skeleton at `path`.
pub fn generate_code_location(path: &Path) -> Result<()> {
    println!("Creating a code location at {}.", path.display());

    let name = project_name(path)?;
    let template = scaffold::templates_root()?.join(CODE_LOCATION_NAME_PLACEHOLDER);
    scaffold::copy_template(path, &template, &[(CODE_LOCATION_NAME_PLACEHOLDER, name.as_str())])
}

/// Generate a component type skeleton under `types_root`.
pub fn generate_component_type(types_root: &Path, name: &str) -> Result<()> {
    let type_root = types_root.join(name);
    println!("Creating a component type at {}.", type_root.display());

    let template = scaffold::templates_root()?.join(COMPONENT_TYPE_TEMPLATE);
    let class_name = camel_case(name);
    scaffold::copy_template(
        &type_root,
        &template,
        &[
            (COMPONENT_TYPE_NAME_PLACEHOLDER, name),
            (COMPONENT_TYPE_CLASS_NAME_PLACEHOLDER, class_name.as_str()),
            (COMPONENT_TYPE_KEY_PLACEHOLDER, name),
        ],
    )
}

/// Generate a component instance under `instances_root`.
///
/// Copies the instance template, runs the component type's file hook with the
/// working directory scoped to the new instance directory, then emits the
/// `component.yaml` descriptor.
pub fn generate_component_instance(
    instances_root: &Path,
    name: &str,
    type_key: &str,
    component_type: &dyn ComponentType,
    generate_params: Option<&Value>,
) -> Result<()> {
    let instance_root = instances_root.join(name);
    println!("Creating a component instance at {}.", instance_root.display());

    let template = scaffold::templates_root()?.join(COMPONENT_INSTANCE_NAME_PLACEHOLDER);
    scaffold::copy_template(
        &instance_root,
        &template,
        &[
            (COMPONENT_INSTANCE_NAME_PLACEHOLDER, name),
            (COMPONENT_TYPE_KEY_PLACEHOLDER, type_key),
        ],
    )?;

    let params = {
        let _workdir = Workdir::change_to(&instance_root)?;
        component_type.generate_files(generate_params)?
        // Guard drops here, restoring the previous working directory.
    };

    let descriptor = ComponentDescriptor::from_params(type_key, params.as_ref())?;
    emit_descriptor(&instance_root.join(COMPONENT_DESCRIPTOR_FILE), &descriptor)
}
