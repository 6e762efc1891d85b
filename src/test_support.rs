use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

use crate::context::{
    CODE_LOCATION_MARKER, CODE_LOCATIONS_DIR, COMPONENT_INSTANCES_DIR, COMPONENT_TYPES_DIR,
    DEPLOYMENT_MARKER,
};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Temp directory shaped like a generated deployment project root.
pub(crate) fn create_deployment_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    std::fs::write(path.join(DEPLOYMENT_MARKER), "name: test-deployment\n").unwrap();
    std::fs::create_dir_all(path.join(CODE_LOCATIONS_DIR)).unwrap();

    temp_dir
}

/// Temp directory shaped like a generated code location project root.
pub(crate) fn create_code_location_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    std::fs::write(path.join(CODE_LOCATION_MARKER), "name: test-location\n").unwrap();
    std::fs::create_dir_all(path.join(COMPONENT_TYPES_DIR)).unwrap();
    std::fs::create_dir_all(path.join(COMPONENT_INSTANCES_DIR)).unwrap();

    temp_dir
}
