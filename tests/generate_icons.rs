use std::fs;
use std::path::PathBuf;

use image::Rgba;
use launcher_icons::{generate_all, OutputFailure, TARGETS};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "launcher_icons_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_all_ten_icons() {
    let root = scratch_dir("all");
    let mut out = Vec::new();

    let report = generate_all(&root, &TARGETS, &mut out).unwrap();
    assert!(report.all_succeeded());
    assert_eq!(report.written.len(), 10);

    for target in TARGETS.iter() {
        let img = image::open(root.join(target.path)).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (target.size, target.size), "{}", target.path);
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn mdpi_icon_pixels() {
    let root = scratch_dir("mdpi");
    generate_all(&root, &TARGETS[..1], &mut Vec::new()).unwrap();

    let img = image::open(root.join(TARGETS[0].path)).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (48, 48));
    assert_eq!(*img.get_pixel(0, 24), Rgba([255, 217, 61, 255]));
    assert_eq!(*img.get_pixel(24, 24), Rgba([255, 255, 255, 255]));
    assert_eq!(img.get_pixel(0, 0)[3], 0);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn rerun_overwrites_existing_files() {
    let root = scratch_dir("rerun");

    let first = generate_all(&root, &TARGETS, &mut Vec::new()).unwrap();
    let second = generate_all(&root, &TARGETS, &mut Vec::new()).unwrap();

    assert!(first.all_succeeded());
    assert!(second.all_succeeded());
    assert_eq!(second.written.len(), 10);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn blocked_directory_fails_only_its_target() {
    let root = scratch_dir("blocked");

    // A plain file where the mdpi directory should go
    let blocker = root.join("android/app/src/main/res/mipmap-mdpi");
    fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    fs::write(&blocker, b"not a directory").unwrap();

    let mut out = Vec::new();
    let report = generate_all(&root, &TARGETS, &mut out).unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.written.len(), 9);
    let (path, err) = &report.failed[0];
    assert_eq!(path, &root.join(TARGETS[0].path));
    assert!(matches!(err, OutputFailure::CreateDir { .. }));

    for target in &TARGETS[1..] {
        assert!(root.join(target.path).is_file(), "{}", target.path);
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("❌ Error: android/app/src/main/res/mipmap-mdpi/ic_launcher.png - "));
    assert!(text.contains("🎉 Icons generated: 9/10"));

    let _ = fs::remove_dir_all(&root);
}
