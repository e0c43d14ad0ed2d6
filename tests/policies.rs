//! End-to-end policy tests against the pure Rust backend.
//!
//! Images are built in memory with the `image` crate; only the save/open
//! tests touch disk (in a temp dir).
//!
//! Run with: cargo test --test policies

use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use image_resize::imaging::{
    ImageBackend, RasterImage, ResizeError, ResizeOptions, ResizePolicy, RustBackend, SizeError,
    resize, resize_by_name, resize_bytes, resize_contain, resize_cover, resize_crop,
    resize_height, resize_thumbnail, resize_width,
};
use image_resize::types::{Color, Size};

fn photo(width: u32, height: u32) -> RasterImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    RasterImage::new(DynamicImage::ImageRgba8(pixels), Some(ImageFormat::Jpeg))
}

fn opts() -> ResizeOptions {
    ResizeOptions::default()
}

// =========================================================================
// The 800x533 photo under every policy
// =========================================================================

#[test]
fn crop_800x533_to_200x200() {
    let backend = RustBackend::new();
    let source = photo(800, 533);
    let out = resize_crop(&backend, &source, Size::new(200, 200), &opts(), true).unwrap();

    assert_eq!(out.size(), Size::new(200, 200));
    // Crop rect starts at (300, 167): pixels come straight from there.
    assert_eq!(
        out.pixels().get_pixel(0, 0),
        source.pixels().get_pixel(300, 167)
    );
}

#[test]
fn cover_800x533_to_200x100() {
    let backend = RustBackend::new();
    let out = resize_cover(&backend, &photo(800, 533), Size::new(200, 100), &opts(), true).unwrap();
    assert_eq!(out.size(), Size::new(200, 100));
}

#[test]
fn contain_800x533_to_200x100_pads_sides() {
    let backend = RustBackend::new();
    let options = ResizeOptions {
        background: Color::rgba(0, 0, 0, 0),
        ..ResizeOptions::default()
    };
    let out = resize_contain(&backend, &photo(800, 533), Size::new(200, 100), &options, true)
        .unwrap();

    assert_eq!(out.size(), Size::new(200, 100));
    // 151 wide image pasted at x=25: columns 0..25 stay background.
    assert_eq!(out.pixels().get_pixel(0, 50), Rgba([0, 0, 0, 0]));
    assert_eq!(out.pixels().get_pixel(24, 50), Rgba([0, 0, 0, 0]));
    assert_eq!(out.pixels().get_pixel(100, 50)[3], 255);
    assert_eq!(out.pixels().get_pixel(199, 50), Rgba([0, 0, 0, 0]));
}

#[test]
fn width_and_height_follow_aspect() {
    let backend = RustBackend::new();
    let source = photo(800, 533);
    let by_width = resize_width(&backend, &source, 200, &opts(), true).unwrap();
    let by_height = resize_height(&backend, &source, 200, &opts(), true).unwrap();

    assert_eq!(by_width.size(), Size::new(200, 134));
    assert_eq!(by_height.size(), Size::new(301, 200));
}

#[test]
fn thumbnail_fits_box() {
    let backend = RustBackend::new();
    let out =
        resize_thumbnail(&backend, &photo(800, 533), Size::new(200, 200), &opts(), true).unwrap();
    assert_eq!(out.size(), Size::new(200, 134));
}

// =========================================================================
// Bounds and identities
// =========================================================================

#[test]
fn crop_rejects_source_smaller_than_target() {
    let backend = RustBackend::new();
    let err = resize_crop(&backend, &photo(800, 533), Size::new(801, 534), &opts(), true)
        .unwrap_err();
    assert!(matches!(err, ResizeError::Size(SizeError::TooSmall { .. })));
    assert_eq!(
        err.to_string(),
        "image is too small: size 800x533, required 801x534"
    );
}

#[test]
fn cover_rejects_equal_axis() {
    let backend = RustBackend::new();
    let err = resize_cover(&backend, &photo(200, 150), Size::new(200, 100), &opts(), true)
        .unwrap_err();
    assert!(matches!(err, ResizeError::Size(SizeError::TooSmall { .. })));
}

#[test]
fn width_equal_to_source_returns_same_pixels() {
    let backend = RustBackend::new();
    let source = photo(640, 480);
    let out = resize_width(&backend, &source, 640, &opts(), true).unwrap();

    assert_eq!(out.size(), source.size());
    assert_eq!(out.pixels().as_bytes(), source.pixels().as_bytes());
}

#[test]
fn thumbnail_never_upscales() {
    let backend = RustBackend::new();
    let source = photo(120, 80);
    let out = resize_thumbnail(&backend, &source, Size::new(400, 400), &opts(), true).unwrap();
    assert_eq!(out.size(), Size::new(120, 80));
    assert_eq!(out.pixels().as_bytes(), source.pixels().as_bytes());
}

#[test]
fn contain_is_idempotent() {
    let backend = RustBackend::new();
    let target = Size::new(160, 90);
    let once = resize_contain(&backend, &photo(500, 500), target, &opts(), true).unwrap();
    let twice = resize_contain(&backend, &once, target, &opts(), true).unwrap();

    assert_eq!(once.size(), target);
    assert_eq!(twice.size(), target);
    assert_eq!(once.pixels().as_bytes(), twice.pixels().as_bytes());
}

#[test]
fn contain_pads_small_source_without_scaling() {
    let backend = RustBackend::new();
    let out = resize_contain(&backend, &photo(40, 20), Size::new(100, 100), &opts(), true)
        .unwrap();
    assert_eq!(out.size(), Size::new(100, 100));
    assert_eq!(out.pixels().get_pixel(0, 0), Rgba([255, 255, 255, 0]));
}

#[test]
fn skipping_validation_lets_width_upscale() {
    let backend = RustBackend::new();
    let err = resize_width(&backend, &photo(100, 50), 300, &opts(), true).unwrap_err();
    assert!(matches!(err, ResizeError::Size(SizeError::TooSmall { .. })));

    let out = resize_width(&backend, &photo(100, 50), 300, &opts(), false).unwrap();
    assert_eq!(out.size(), Size::new(300, 150));
}

#[test]
fn zero_target_is_rejected_even_without_validation() {
    let backend = RustBackend::new();
    let err = resize_width(&backend, &photo(100, 50), 0, &opts(), false).unwrap_err();
    assert!(matches!(
        err,
        ResizeError::Size(SizeError::InvalidSize { .. })
    ));
}

// =========================================================================
// Dispatch by name
// =========================================================================

#[test]
fn resize_by_name_matches_direct_call() {
    let backend = RustBackend::new();
    let source = photo(800, 533);
    let by_name = resize_by_name(&backend, "cover", &source, Size::new(200, 100), &opts()).unwrap();
    let direct = resize(
        &backend,
        ResizePolicy::Cover {
            size: Size::new(200, 100),
        },
        &source,
        &opts(),
    )
    .unwrap();
    assert_eq!(by_name.pixels().as_bytes(), direct.pixels().as_bytes());
}

#[test]
fn resize_by_name_rejects_unknown_policy() {
    let backend = RustBackend::new();
    let err = resize_by_name(&backend, "stretch", &photo(10, 10), Size::new(5, 5), &opts())
        .unwrap_err();
    assert!(matches!(err, ResizeError::UnknownPolicy { ref name } if name == "stretch"));
}

// =========================================================================
// Formats and files
// =========================================================================

#[test]
fn jpeg_tag_survives_resize() {
    let backend = RustBackend::new();
    let out =
        resize_thumbnail(&backend, &photo(300, 200), Size::new(100, 100), &opts(), true).unwrap();
    assert_eq!(out.format(), Some(ImageFormat::Jpeg));
}

#[test]
fn resize_bytes_png_to_png() {
    let backend = RustBackend::new();
    let png = backend.encode(&photo(64, 48), ImageFormat::Png).unwrap();

    let bytes = resize_bytes(
        &backend,
        ResizePolicy::Width { width: 32 },
        &png,
        ImageFormat::Png,
        &opts(),
    )
    .unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (32, 24));
}

#[test]
fn save_then_open_keeps_size_and_format() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("thumb.jpg");
    let backend = RustBackend::with_quality(85);

    let out =
        resize_thumbnail(&backend, &photo(800, 533), Size::new(200, 200), &opts(), true).unwrap();
    backend.save(&out, &path).unwrap();

    let loaded = backend.open(&path).unwrap();
    assert_eq!(loaded.size(), Size::new(200, 134));
    assert_eq!(loaded.format(), Some(ImageFormat::Jpeg));
    assert_eq!(backend.identify(&path).unwrap(), Size::new(200, 134));
}
