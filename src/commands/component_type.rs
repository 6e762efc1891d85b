//! Implementation of `trellis generate component-type`.

use crate::cli::ComponentTypeArgs;
use crate::context::{self, CodeLocationContext};
use crate::error::{Result, TrellisError};
use crate::generate;
use crate::registry::ComponentRegistry;
use std::env;

/// Execute the `generate component-type` command.
///
/// Must run inside a code location project; the name must not collide with a
/// registered type or an already generated type directory.
pub fn cmd_component_type(args: ComponentTypeArgs, registry: &ComponentRegistry) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        TrellisError::Io(format!("failed to get current working directory: {}", e))
    })?;

    if !context::is_inside_code_location_project(&cwd) {
        return Err(TrellisError::NotInExpectedContext(
            "this command must be run inside a trellis code location project.".to_string(),
        ));
    }

    let context = CodeLocationContext::from_path(&cwd, registry)?;
    if context.has_component_type(&args.name) {
        return Err(TrellisError::DestinationExists(format!(
            "a component type named `{}` already exists.",
            args.name
        )));
    }

    generate::generate_component_type(&context.component_types_root_path(), &args.name)
}
