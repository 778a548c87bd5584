use std::path::PathBuf;

use easel_engine::coords::{Color, Vec2};
use easel_engine::persist::{self, LoadError, LoadPolicy, SAVE_FILE_NAME};
use easel_engine::scene::{Scene, ShapeKind};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("easel_test_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).ok();
    dir
}

#[test]
fn scene_survives_a_trip_through_disk() {
    let dir = scratch_dir("round_trip");
    let path = dir.join(SAVE_FILE_NAME);

    let mut scene = Scene::new();
    scene.push_point(Vec2::new(0.5, -0.5), Color::GREEN, 10.0);
    scene.push_circle(Vec2::new(-0.1, 0.2), Color::new(0.3, 0.3, 1.0, 1.0), 0.05, 20);
    scene.push_triangle(Vec2::new(0.9, 0.9), Color::WHITE, 0.025);

    persist::write_save(&path, &scene).unwrap();
    let loaded = persist::load_file(&path, LoadPolicy::Lenient).unwrap();

    assert_eq!(loaded, scene);
    let kinds: Vec<ShapeKind> = loaded.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![ShapeKind::Point, ShapeKind::Circle, ShapeKind::Triangle]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn saved_empty_scene_is_rejected_on_load() {
    let dir = scratch_dir("empty");
    let path = dir.join(SAVE_FILE_NAME);

    persist::write_save(&path, &Scene::new()).unwrap();
    let result = persist::load_file(&path, LoadPolicy::Lenient);
    assert!(matches!(result, Err(LoadError::Malformed(_))));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = scratch_dir("missing");
    let result = persist::load_file(dir.join("nope.json"), LoadPolicy::Lenient);
    assert!(matches!(result, Err(LoadError::Io(_))));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn non_utf8_file_is_rejected() {
    let dir = scratch_dir("binary");
    let path = dir.join("garbage.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let result = persist::load_file(&path, LoadPolicy::Lenient);
    assert!(matches!(result, Err(LoadError::Io(_))));

    std::fs::remove_dir_all(&dir).ok();
}
