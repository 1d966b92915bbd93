// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Mini tools (scene files and their storage).
//! Keeps CLI adapters thin; storage backends implement [`store::SceneStore`].

pub mod scene;
pub mod service;
pub mod store;

pub use scene::{BodySpec, EntitySpec, SceneConfig, SpriteGrid};
pub use service::SceneService;
pub use store::{SceneError, SceneStore};
