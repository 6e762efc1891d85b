//! Template instantiation for trellis.
//!
//! A template is a plain directory tree shipped with the tool. Instantiating
//! one copies the tree to a destination while substring-replacing fixed
//! placeholder tokens in directory names, file names, and UTF-8 file bodies.
//! Non-UTF-8 files are copied byte-for-byte with name substitution only.
//!
//! The copier never overwrites: the destination must be absent before the
//! copy begins. No partial-tree cleanup is attempted on a mid-copy failure;
//! since the destination did not previously exist, leftovers are safe to
//! delete manually.

use crate::error::{Result, TrellisError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder for the deployment name in the deployment template.
pub const DEPLOYMENT_NAME_PLACEHOLDER: &str = "DEPLOYMENT_NAME_PLACEHOLDER";

/// Placeholder for the code location name in the code location template.
pub const CODE_LOCATION_NAME_PLACEHOLDER: &str = "CODE_LOCATION_NAME_PLACEHOLDER";

/// Placeholder for the component type name in the component type template.
pub const COMPONENT_TYPE_NAME_PLACEHOLDER: &str = "COMPONENT_TYPE_NAME_PLACEHOLDER";

/// Placeholder for the camel-cased class name in the component type template.
pub const COMPONENT_TYPE_CLASS_NAME_PLACEHOLDER: &str = "COMPONENT_TYPE_CLASS_NAME_PLACEHOLDER";

/// Placeholder for the component type registry key.
pub const COMPONENT_TYPE_KEY_PLACEHOLDER: &str = "COMPONENT_TYPE_KEY_PLACEHOLDER";

/// Placeholder for the instance name in the component instance template.
pub const COMPONENT_INSTANCE_NAME_PLACEHOLDER: &str = "COMPONENT_INSTANCE_NAME_PLACEHOLDER";

/// Template directory name for component types (shared by all type names).
pub const COMPONENT_TYPE_TEMPLATE: &str = "COMPONENT_TYPE";

/// Environment override for the template root directory.
pub const TEMPLATES_DIR_ENV: &str = "TRELLIS_TEMPLATES_DIR";

/// Resolve the directory holding the shipped template trees.
///
/// Resolution order: the `TRELLIS_TEMPLATES_DIR` environment variable, a
/// `templates/` directory beside the running executable, then the crate
/// manifest directory (dev and test runs). A missing root is a packaging
/// defect, not a user error.
pub fn templates_root() -> Result<PathBuf> {
    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        let path = PathBuf::from(dir);
        if path.is_dir() {
            return Ok(path);
        }
        return Err(TrellisError::TemplateMissing(path.display().to_string()));
    }

    if let Ok(exe) = env::current_exe()
        && let Some(exe_dir) = exe.parent()
    {
        let beside_exe = exe_dir.join("templates");
        if beside_exe.is_dir() {
            return Ok(beside_exe);
        }
    }

    let in_manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
    if in_manifest.is_dir() {
        return Ok(in_manifest);
    }

    Err(TrellisError::TemplateMissing("templates".to_string()))
}

/// Apply ordered literal token substitutions to a string.
pub fn apply_substitutions(input: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = input.to_string();
    for (token, replacement) in substitutions {
        output = output.replace(token, replacement);
    }
    output
}

/// Copy `template_dir` to `dest`, substituting placeholder tokens in entry
/// names and UTF-8 file bodies.
///
/// Fails with `DestinationExists` if `dest` already exists and with
/// `TemplateMissing` if `template_dir` does not.
pub fn copy_template(dest: &Path, template_dir: &Path, substitutions: &[(&str, &str)]) -> Result<()> {
    if !template_dir.is_dir() {
        return Err(TrellisError::TemplateMissing(
            template_dir.display().to_string(),
        ));
    }

    if dest.exists() {
        return Err(TrellisError::DestinationExists(format!(
            "a file or directory at {} already exists.",
            dest.display()
        )));
    }

    copy_tree(template_dir, dest, substitutions)
}

fn copy_tree(src: &Path, dest: &Path, substitutions: &[(&str, &str)]) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| {
        TrellisError::Io(format!("failed to create directory '{}': {}", dest.display(), e))
    })?;

    let entries = fs::read_dir(src).map_err(|e| {
        TrellisError::Io(format!("failed to read template directory '{}': {}", src.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            TrellisError::Io(format!("failed to read template entry in '{}': {}", src.display(), e))
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let target = dest.join(apply_substitutions(&name, substitutions));

        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target, substitutions)?;
        } else {
            copy_file(&entry.path(), &target, substitutions)?;
        }
    }

    Ok(())
}

fn copy_file(src: &Path, dest: &Path, substitutions: &[(&str, &str)]) -> Result<()> {
    let bytes = fs::read(src).map_err(|e| {
        TrellisError::Io(format!("failed to read template file '{}': {}", src.display(), e))
    })?;

    // Only substitute in text files; anything non-UTF-8 is copied verbatim.
    let output = match String::from_utf8(bytes) {
        Ok(text) => apply_substitutions(&text, substitutions).into_bytes(),
        Err(err) => err.into_bytes(),
    };

    fs::write(dest, output).map_err(|e| {
        TrellisError::Io(format!("failed to write '{}': {}", dest.display(), e))
    })
}
