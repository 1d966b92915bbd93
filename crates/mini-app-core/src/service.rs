// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene service: JSON (de)serialization over a [`SceneStore`].

use mini_core::Stage;
use tracing::{debug, info};

use crate::scene::SceneConfig;
use crate::store::{SceneError, SceneStore};

/// Thin service that serializes scenes and delegates storage to a `SceneStore`.
pub struct SceneService<S> {
    store: S,
}

impl<S> SceneService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> SceneService<S>
where
    S: SceneStore,
{
    /// Load and deserialize scene `name`. Returns `Ok(None)` if missing.
    pub fn load_scene(&self, name: &str) -> Result<Option<SceneConfig>, SceneError> {
        match self.store.load_raw(name) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let scene: SceneConfig = serde_json::from_slice(&bytes)?;
                debug!(
                    name,
                    statics = scene.statics.len(),
                    bodies = scene.bodies.len(),
                    "scene loaded"
                );
                Ok(Some(scene))
            }
            Err(SceneError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist scene `name`.
    pub fn save_scene(&self, name: &str, scene: &SceneConfig) -> Result<(), SceneError> {
        let data = serde_json::to_vec_pretty(scene)?;
        self.store.save_raw(name, &data)?;
        info!(name, bytes = data.len(), "scene saved");
        Ok(())
    }

    /// Loads scene `name` and builds its stage.
    pub fn load_stage(&self, name: &str) -> Result<Stage, SceneError> {
        let scene = self.load_scene(name)?.ok_or(SceneError::NotFound)?;
        Ok(scene.build_stage()?)
    }
}
