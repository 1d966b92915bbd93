// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port for scene files.

use mini_core::CoreError;
use thiserror::Error;

/// Where scene JSON lives. Implementations map a scene name to one blob.
pub trait SceneStore {
    /// Bytes saved under `name`, or [`SceneError::NotFound`] if none were.
    fn load_raw(&self, name: &str) -> Result<Vec<u8>, SceneError>;
    /// Replaces the bytes saved under `name`.
    fn save_raw(&self, name: &str, data: &[u8]) -> Result<(), SceneError>;
}

/// Failure loading, saving or building a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// No scene saved under the requested name.
    #[error("scene not found")]
    NotFound,
    /// The scene name cannot be used as a storage key.
    #[error("invalid scene name: {0:?}")]
    InvalidName(String),
    /// No platform directory to keep scenes in.
    #[error("no config directory for scenes on this platform")]
    NoConfigDir,
    /// Reading or writing the scene file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Scene bytes are not valid scene JSON.
    #[error("malformed scene json: {0}")]
    Serde(#[from] serde_json::Error),
    /// The scene describes an invalid stage.
    #[error("invalid scene: {0}")]
    Core(#[from] CoreError),
}
