//! End-to-end tests driving the full pipeline: bitmap files on disk,
//! decode, template loading, multi-worker search, sorted results.

use std::fs;
use std::path::{Path, PathBuf};

use bitmap_search::bitmap;
use bitmap_search::search::{MatchResult, SearchConfig, SearchCoordinator, Template};
use bitmap_search::{Image, Pixel, SearchError};

/// Fresh scratch directory for one test's bitmap files.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "bitmap-search-e2e-{}-{}",
        test,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Save an [`Image`] as a 24-bit .bmp through the `image` crate encoder.
fn save_bmp(dir: &Path, name: &str, img: &Image) -> PathBuf {
    let path = dir.join(name);
    img.to_rgb_image().save(&path).expect("save bmp");
    path
}

fn solid_block(base: Image, top: u32, left: u32, size: u32, pixel: Pixel) -> Image {
    let mut pixels = Vec::with_capacity((base.width() * base.height()) as usize);
    for row in 0..base.height() {
        for col in 0..base.width() {
            let inside =
                row >= top && row < top + size && col >= left && col < left + size;
            pixels.push(if inside { pixel } else { base.pixel(row, col) });
        }
    }
    Image::from_pixels(base.width(), base.height(), pixels)
}

#[test]
fn searches_bitmap_files_with_multiple_workers() {
    let dir = scratch_dir("search");
    let white = Pixel::new(255, 255, 255);
    let red = Pixel::new(180, 20, 20);

    let reference = solid_block(Image::filled(8, 8, white), 3, 2, 2, red);
    let reference_path = save_bmp(&dir, "scene.bmp", &reference);
    let template_path = save_bmp(&dir, "005_block.bmp", &Image::filled(2, 2, red));

    let decoded = bitmap::decode(&reference_path).expect("decode reference");
    assert_eq!(decoded, reference);

    let template = Template::load(&template_path).expect("load template");
    assert_eq!(template.id, 5);

    let coordinator = SearchCoordinator::new(
        decoded,
        SearchConfig {
            max_scale: 2,
            worker_count: 3,
        },
    );
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let results = runtime
        .block_on(coordinator.run(vec![template]))
        .expect("search");

    assert_eq!(
        results,
        vec![MatchResult {
            template_id: 5,
            position_x: 2,
            position_y: 3,
        }]
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn template_with_non_numeric_name_is_reported() {
    let dir = scratch_dir("badname");
    let path = save_bmp(&dir, "nonnumeric.bmp", &Image::filled(2, 2, Pixel::new(1, 2, 3)));

    let err = Template::load(&path).unwrap_err();
    assert!(matches!(err, SearchError::TemplateId { .. }), "got {err:?}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_template_file_is_reported_with_path() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("009_broken.bmp");
    fs::write(&path, b"BMnot really a bitmap").expect("write stub");

    let err = Template::load(&path).unwrap_err();
    assert!(matches!(err, SearchError::Bitmap { .. }), "got {err:?}");

    let _ = fs::remove_dir_all(&dir);
}
