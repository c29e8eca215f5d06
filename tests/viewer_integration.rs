// SPDX-License-Identifier: MPL-2.0
use glimpse::config::{self, Config, SortOrder};
use glimpse::directory_scanner::{build_thumbnails, RebuildOutcome, ThumbnailOptions};
use glimpse::error::Error;
use glimpse::media::{FlipAxis, RotateDirection, SaveFormat};
use glimpse::viewer::{RebuildTicket, RenderedBitmap, SaveOptions, ViewerState};
use image_rs::{GenericImageView, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 11) as u8, 90, 255])
    })
    .save(&path)
    .expect("Failed to write png fixture");
    path
}

fn run_rebuild(state: &mut ViewerState, ticket: &RebuildTicket, options: ThumbnailOptions) {
    match build_thumbnails(ticket, options).expect("Failed to list directory") {
        RebuildOutcome::Complete(batch) => assert!(state.apply_thumbnails(batch)),
        RebuildOutcome::Cancelled => panic!("rebuild was cancelled"),
    }
}

fn sniff_format(path: &Path) -> Option<ImageFormat> {
    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .expect("Failed to open written file")
        .format()
}

#[test]
fn open_relative_photo_then_save_jpeg() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(dir.path(), "photo.png", 32, 24);
    // Only this test relies on the working directory.
    std::env::set_current_dir(dir.path()).expect("Failed to change directory");

    let mut state = ViewerState::new();
    let ticket = state.open("photo.png").expect("photo.png should open");

    assert!(state.has_image());
    assert_eq!(state.zoom_factor().value(), 1.0);
    assert_eq!(state.current_path(), Some(Path::new("photo.png")));
    assert_eq!(ticket.directory, PathBuf::from("."));

    state
        .save("out.jpg", &SaveOptions::default())
        .expect("out.jpg should save");

    let out = dir.path().join("out.jpg");
    assert_eq!(sniff_format(&out), Some(ImageFormat::Jpeg));
    let decoded = image_rs::open(&out).expect("out.jpg should decode");
    assert_eq!(decoded.dimensions(), (32, 24));
}

#[test]
fn corrupt_file_leaves_previous_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let good = write_png(dir.path(), "good.png", 10, 10);
    let corrupt = dir.path().join("corrupt.png");
    fs::write(&corrupt, b"\x89PNG but not really").expect("Failed to write corrupt file");

    let mut state = ViewerState::new();
    state.open(&good).expect("good.png should open");
    let before = state.image().expect("image").to_rgba8();

    let result = state.open(&corrupt);

    assert!(matches!(result, Err(Error::Decode(_))));
    assert_eq!(state.current_path(), Some(good.as_path()));
    assert_eq!(state.image().expect("image").to_rgba8(), before);
}

#[test]
fn rebuild_skips_non_images_in_enumeration_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(dir.path(), "one.png", 12, 8);
    write_png(dir.path(), "two.png", 8, 12);
    write_png(dir.path(), "three.png", 5, 5);
    fs::write(dir.path().join("notes.txt"), b"hello").expect("Failed to write text file");
    fs::write(dir.path().join("data.bin"), [0u8, 1, 2, 3]).expect("Failed to write bin file");

    let expected: Vec<PathBuf> = fs::read_dir(dir.path())
        .expect("Failed to read directory")
        .map(|entry| entry.expect("entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();

    let mut state = ViewerState::new();
    let ticket = state.open(&expected[0]).expect("open");
    run_rebuild(&mut state, &ticket, ThumbnailOptions::default());

    let listed: Vec<PathBuf> = state.thumbnails().iter().map(|t| t.path.clone()).collect();
    assert_eq!(listed, expected);
    assert_eq!(state.selected(), None);
}

#[test]
fn next_thumbnail_full_cycle_returns_to_start() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let first = write_png(dir.path(), "a.png", 4, 4);
    for name in ["b.png", "c.png", "d.png"] {
        write_png(dir.path(), name, 4, 4);
    }

    let mut state = ViewerState::new();
    let ticket = state.open(&first).expect("open");
    run_rebuild(&mut state, &ticket, ThumbnailOptions::default());
    let len = state.thumbnails().len();
    assert_eq!(len, 4);

    for start in 0..len {
        state.select_thumbnail(start).expect("select");
        for _ in 0..len {
            state.next_thumbnail().expect("next");
        }
        assert_eq!(state.selected(), Some(start));
    }
}

#[test]
fn out_of_range_selection_clears_without_touching_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let first = write_png(dir.path(), "a.png", 6, 3);
    write_png(dir.path(), "b.png", 3, 6);

    let mut state = ViewerState::new();
    let ticket = state.open(&first).expect("open");
    run_rebuild(&mut state, &ticket, ThumbnailOptions::default());
    state.select_thumbnail(0usize).expect("select");
    let path_before = state.current_path().map(Path::to_path_buf);

    state.select_thumbnail(-1i64).expect("negative index");
    assert_eq!(state.selected(), None);

    state.select_thumbnail(0usize).expect("select");
    let len = state.thumbnails().len();
    state.select_thumbnail(len).expect("index == len");
    assert_eq!(state.selected(), None);

    assert_eq!(state.current_path().map(Path::to_path_buf), path_before);
}

#[test]
fn newer_open_supersedes_running_rebuild() {
    let dir_a = tempdir().expect("Failed to create temporary directory");
    let dir_b = tempdir().expect("Failed to create temporary directory");
    let a = write_png(dir_a.path(), "a.png", 4, 4);
    let b = write_png(dir_b.path(), "b.png", 4, 4);
    write_png(dir_b.path(), "c.png", 4, 4);

    let mut state = ViewerState::new();
    let stale = state.open(&a).expect("open a");
    let fresh = state.open(&b).expect("open b");

    let stale_outcome =
        build_thumbnails(&stale, ThumbnailOptions::default()).expect("stale rebuild");
    assert!(matches!(stale_outcome, RebuildOutcome::Cancelled));

    run_rebuild(&mut state, &fresh, ThumbnailOptions::default());
    assert_eq!(state.thumbnails().len(), 2);
    assert!(state
        .thumbnails()
        .iter()
        .all(|t| t.path.parent() == Some(dir_b.path())));
}

#[test]
fn transforms_round_trip_through_save() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let source = write_png(dir.path(), "src.png", 9, 4);

    let mut state = ViewerState::new();
    state.open(&source).expect("open");
    let original = state.image().expect("image").to_rgba8();

    for _ in 0..4 {
        state.rotate(RotateDirection::Clockwise);
    }
    state.flip(FlipAxis::Horizontal);
    state.flip(FlipAxis::Horizontal);

    let copy = dir.path().join("copy.png");
    state.save(&copy, &SaveOptions::default()).expect("save png");
    assert_eq!(sniff_format(&copy), Some(ImageFormat::Png));

    let reopened = image_rs::open(&copy).expect("decode copy").to_rgba8();
    assert_eq!(reopened, original);
}

#[test]
fn render_tracks_zoom_and_reset() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let source = write_png(dir.path(), "src.png", 100, 50);

    let mut state = ViewerState::new();
    assert!(matches!(state.render(), RenderedBitmap::Empty));
    state.open(&source).expect("open");

    state.zoom(1.5);
    state.zoom(0.5);
    let RenderedBitmap::Image(zoomed) = state.render() else {
        panic!("expected image");
    };
    assert_eq!(zoomed.dimensions(), (75, 38));

    state.reset_zoom();
    let RenderedBitmap::Image(reset) = state.render() else {
        panic!("expected image");
    };
    assert_eq!(reset.dimensions(), (100, 50));
}

#[test]
fn configured_save_and_thumbnail_settings_apply() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        r#"
[thumbnails]
size = 40
sort_order = "alphabetical"

[save]
default_format = "png"
"#,
    )
    .expect("Failed to write config");
    let config: Config = config::load_from_path(&config_path).expect("config should parse");

    let images = tempdir().expect("Failed to create temporary directory");
    let wide = write_png(images.path(), "b_wide.png", 200, 100);
    write_png(images.path(), "a_tall.png", 50, 100);

    let mut state = ViewerState::new();
    let ticket = state.open(&wide).expect("open");
    run_rebuild(&mut state, &ticket, ThumbnailOptions::from(&config));

    let thumbs = state.thumbnails();
    assert!(thumbs[0].path.ends_with("a_tall.png"));
    assert_eq!((thumbs[0].image.width, thumbs[0].image.height), (20, 40));
    assert_eq!((thumbs[1].image.width, thumbs[1].image.height), (40, 20));
    assert_eq!(config.sort_order(), SortOrder::Alphabetical);

    let untyped = images.path().join("export");
    state
        .save(&untyped, &SaveOptions::from(&config))
        .expect("save without extension");
    assert_eq!(sniff_format(&untyped), Some(ImageFormat::Png));
    assert_eq!(config.default_save_format(), SaveFormat::Png);
}
