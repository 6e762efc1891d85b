//! Implementation of `trellis generate component`.

use crate::cli::ComponentArgs;
use crate::context::{self, CodeLocationContext};
use crate::error::{Result, TrellisError};
use crate::generate;
use crate::params;
use crate::registry::ComponentRegistry;
use std::env;

/// Execute the `generate component` command.
///
/// Must run inside a code location project, against a registered component
/// type and an unused instance name. Parameters are resolved from
/// `--json-params` or the type's own argument parser before any file is
/// created.
pub fn cmd_component(args: ComponentArgs, registry: &ComponentRegistry) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        TrellisError::Io(format!("failed to get current working directory: {}", e))
    })?;

    if !context::is_inside_code_location_project(&cwd) {
        return Err(TrellisError::NotInExpectedContext(
            "this command must be run inside a trellis code location project.".to_string(),
        ));
    }

    let context = CodeLocationContext::from_path(&cwd, registry)?;
    if !context.has_component_type(&args.component_type) {
        return Err(TrellisError::UnknownComponentType(format!(
            "no component type `{}` could be resolved.",
            args.component_type
        )));
    }
    if context.has_component_instance(&args.component_name) {
        return Err(TrellisError::DestinationExists(format!(
            "a component instance named `{}` already exists.",
            args.component_name
        )));
    }

    let component_type = context.get_component_type(&args.component_type)?;
    let generate_params = params::resolve_generate_params(
        component_type,
        args.json_params.as_deref(),
        &args.extra_args,
    )?;

    generate::generate_component_instance(
        &context.component_instances_root_path(),
        &args.component_name,
        &args.component_type,
        component_type,
        generate_params.as_ref(),
    )
}
