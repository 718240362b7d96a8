//! Tests for the output directory storage.

use storybook_core::{Page, Storybook};
use storybook_error::StorybookErrorKind;
use storybook_storage::{AssetStatus, FileSystemStorage, StorageErrorKind};
use tempfile::TempDir;

fn sample_storybook(image: Option<&str>) -> Storybook {
    Storybook::new(
        "Newton and the Apple",
        "Learn how Isaac Newton discovered gravity!",
        vec![Page::new(0, "Newton saw an apple fall.", image.map(str::to_string))],
    )
}

#[tokio::test]
async fn test_creates_nested_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nextjs-app").join("public").join("storybook");

    let storage = FileSystemStorage::new(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(storage.base_path(), nested.as_path());

    // Idempotent
    FileSystemStorage::new(&nested).unwrap();
}

#[tokio::test]
async fn test_write_image_and_inspect() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let asset = storage.write_image("scene_1.png", b"png bytes").await.unwrap();
    assert_eq!(asset.filename, "scene_1.png");
    assert_eq!(asset.size_bytes, 9);
    assert_eq!(std::fs::read(&asset.path).unwrap(), b"png bytes");
    assert!(!asset.path.with_extension("tmp").exists());

    let status = storage.inspect("scene_1.png").await.unwrap();
    assert_eq!(status, AssetStatus::Present { size_bytes: 9 });
    assert!(status.is_usable());
}

#[tokio::test]
async fn test_missing_file_inspects_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let status = storage.inspect("scene_4.png").await.unwrap();
    assert_eq!(status, AssetStatus::Missing);
    assert!(!status.is_usable());
    assert_eq!(status.to_string(), "NO - MISSING!");
}

#[tokio::test]
async fn test_rewrite_overwrites_image() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    storage.write_image("scene_2.png", b"first run, longer").await.unwrap();
    storage.write_image("scene_2.png", b"second").await.unwrap();

    let data = std::fs::read(temp_dir.path().join("scene_2.png")).unwrap();
    assert_eq!(data, b"second");
}

#[tokio::test]
async fn test_manifest_round_trip_and_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    storage
        .write_manifest("storybook.json", &sample_storybook(Some("scene_1.png")))
        .await
        .unwrap();
    storage
        .write_manifest("storybook.json", &sample_storybook(None))
        .await
        .unwrap();

    let reloaded = storage.read_manifest("storybook.json").await.unwrap();
    assert_eq!(reloaded, sample_storybook(None));
}

#[tokio::test]
async fn test_read_missing_manifest_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let err = storage.read_manifest("storybook.json").await.unwrap_err();
    match err.kind() {
        StorybookErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::NotFound(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn test_rejects_paths_outside_directory() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    for name in ["../escape.png", "nested/scene_1.png", "", ".."] {
        assert!(storage.write_image(name, b"x").await.is_err(), "{name}");
    }
}
