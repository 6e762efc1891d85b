//! Filesystem utilities for trellis.
//!
//! The only resource-scoping concern in the tool lives here: a scoped
//! working-directory change used while a component type's file hook runs
//! inside a freshly generated instance directory.

use crate::error::{Result, TrellisError};
use std::env;
use std::path::{Path, PathBuf};

/// Scoped working-directory change.
///
/// Changes the process working directory on construction and restores the
/// previous one on drop, on every exit path including errors. The process
/// working directory is global state, so holders should be short-lived.
#[derive(Debug)]
pub struct Workdir {
    original: PathBuf,
}

impl Workdir {
    /// Enter `dir`, remembering the current working directory.
    pub fn change_to<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let original = env::current_dir().map_err(|e| {
            TrellisError::Io(format!("failed to get current working directory: {}", e))
        })?;
        env::set_current_dir(dir).map_err(|e| {
            TrellisError::Io(format!("failed to enter directory '{}': {}", dir.display(), e))
        })?;
        Ok(Self { original })
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}
