// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Filesystem scene store against a temporary directory.

use mini_app_core::{SceneConfig, SceneError, SceneService, SceneStore};
use mini_config_fs::FsSceneStore;

#[test]
fn raw_blobs_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap_or_else(|err| unreachable!("{err}"));
    let store =
        FsSceneStore::at(dir.path().join("scenes")).unwrap_or_else(|err| unreachable!("{err}"));
    assert!(store.base().is_dir());
    assert!(matches!(store.load_raw("level1"), Err(SceneError::NotFound)));
    assert!(store.save_raw("level1", b"{}").is_ok());
    assert_eq!(store.load_raw("level1").ok(), Some(b"{}".to_vec()));
    assert!(dir.path().join("scenes").join("level1.json").is_file());
}

#[test]
fn scene_service_over_fs_store() {
    let dir = tempfile::tempdir().unwrap_or_else(|err| unreachable!("{err}"));
    let store = FsSceneStore::at(dir.path()).unwrap_or_else(|err| unreachable!("{err}"));
    let svc = SceneService::new(store);
    let scene = SceneConfig::demo();
    assert!(svc.save_scene("demo", &scene).is_ok());
    assert_eq!(svc.load_scene("demo").ok().flatten(), Some(scene));
    let mut stage = svc.load_stage("demo").unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(stage.tick().moved, 3);
}

#[test]
fn path_like_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap_or_else(|err| unreachable!("{err}"));
    let store = FsSceneStore::at(dir.path()).unwrap_or_else(|err| unreachable!("{err}"));
    for name in ["", "..", "a/b", "a\\b"] {
        assert!(matches!(
            store.save_raw(name, b"{}"),
            Err(SceneError::InvalidName(ref n)) if n == name
        ));
        assert!(matches!(store.load_raw(name), Err(SceneError::InvalidName(_))));
    }
    assert!(store.path_for("level1").is_ok());
}

#[test]
fn scene_errors_name_the_problem() {
    let name = SceneError::InvalidName("a/b".into()).to_string();
    assert_eq!(name, r#"invalid scene name: "a/b""#);
    assert!(SceneError::NoConfigDir.to_string().contains("config directory"));
}
