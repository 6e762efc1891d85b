//! Implementation of `trellis generate code-location`.

use crate::cli::CodeLocationArgs;
use crate::context::{self, DeploymentContext};
use crate::error::{Result, TrellisError};
use crate::generate;
use std::env;

/// Execute the `generate code-location` command.
///
/// Must run inside a deployment project; the name must not already be taken
/// among the deployment's code locations.
pub fn cmd_code_location(args: CodeLocationArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        TrellisError::Io(format!("failed to get current working directory: {}", e))
    })?;

    if !context::is_inside_deployment_project(&cwd) {
        return Err(TrellisError::NotInExpectedContext(
            "this command must be run inside a trellis deployment project.".to_string(),
        ));
    }

    let context = DeploymentContext::from_path(&cwd)?;
    if context.has_code_location(&args.name) {
        return Err(TrellisError::DestinationExists(format!(
            "a code location named {} already exists.",
            args.name
        )));
    }

    let code_location_path = context.code_location_root_path().join(&args.name);
    generate::generate_code_location(&code_location_path)
}
