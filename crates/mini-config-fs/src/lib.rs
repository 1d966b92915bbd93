// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene files on disk: one `<name>.json` per scene under a base directory.

use directories::ProjectDirs;
use mini_app_core::store::{SceneError, SceneStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`SceneStore`] over a directory of `<name>.json` files.
#[derive(Debug, Clone)]
pub struct FsSceneStore {
    base: PathBuf,
}

impl FsSceneStore {
    /// Store under `scenes/` in the platform config dir for Mini.
    pub fn new() -> Result<Self, SceneError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Mini")
            .ok_or(SceneError::NoConfigDir)?;
        Self::at(proj.config_dir().join("scenes"))
    }

    /// Store over `base`. The directory is created when missing.
    pub fn at(base: impl Into<PathBuf>) -> Result<Self, SceneError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        debug!(base = %base.display(), "scene store ready");
        Ok(Self { base })
    }

    /// Directory holding the scene files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File path used for scene `name`.
    ///
    /// Names are single path components; separators and parent references
    /// are rejected.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SceneError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(SceneError::InvalidName(name.to_owned()));
        }
        Ok(self.base.join(format!("{name}.json")))
    }
}

impl SceneStore for FsSceneStore {
    fn load_raw(&self, name: &str) -> Result<Vec<u8>, SceneError> {
        let path = self.path_for(name)?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SceneError::NotFound),
            Err(err) => Err(SceneError::Io(err)),
        }
    }

    fn save_raw(&self, name: &str, data: &[u8]) -> Result<(), SceneError> {
        let path = self.path_for(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
