//! Implementation of `trellis generate deployment`.

use crate::cli::DeploymentArgs;
use crate::error::{Result, TrellisError};
use crate::generate;
use std::path;

/// Execute the `generate deployment` command.
///
/// The destination path must not exist; the check happens before any
/// filesystem mutation.
pub fn cmd_deployment(args: DeploymentArgs) -> Result<()> {
    let dir_abspath = path::absolute(&args.path).map_err(|e| {
        TrellisError::Io(format!("failed to resolve path '{}': {}", args.path, e))
    })?;

    if dir_abspath.exists() {
        return Err(TrellisError::DestinationExists(format!(
            "a file or directory at {} already exists.\n\
             Delete the contents of this path or choose another location.",
            dir_abspath.display()
        )));
    }

    generate::generate_deployment(&dir_abspath)
}
