use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

use zernike_core::compute_zernike_moments;
use zernike_core::error::ZernikeError;
use zernike_core::io::image_io::load_image;

type Gray16 = ImageBuffer<Luma<u16>, Vec<u16>>;

#[test]
fn test_load_sixteen_bit_tiff() {
    let mut img = Gray16::new(4, 4);
    img.put_pixel(1, 0, Luma([32768]));
    img.put_pixel(0, 1, Luma([65535]));
    img.put_pixel(3, 2, Luma([16384]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.tiff");
    img.save(&path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.width(), 4);
    assert_eq!(loaded.height(), 4);
    assert_eq!(loaded.original_bit_depth, 16);
    assert!((loaded.data[[0, 0]] - 0.0).abs() < 1e-4);
    assert!((loaded.data[[0, 1]] - 0.5).abs() < 1e-3);
    assert!((loaded.data[[1, 0]] - 1.0).abs() < 1e-4);
    assert!((loaded.data[[2, 3]] - 0.25).abs() < 1e-3);
}

#[test]
fn test_png_is_loaded_as_eight_bit() {
    let img = GrayImage::from_pixel(6, 8, Luma([128]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");
    img.save(&path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.original_bit_depth, 8);
    assert_eq!(loaded.width(), 6);
    assert_eq!(loaded.height(), 8);
    assert!((loaded.data[[3, 2]] - 128.0 / 255.0).abs() < 1e-4);
}

#[test]
fn test_loaded_frame_feeds_moments() {
    let level = (0.8 * 65535.0f32).round() as u16;
    let img = Gray16::from_fn(24, 24, |x, y| {
        if (6..18).contains(&y) && (8..14).contains(&x) {
            Luma([level])
        } else {
            Luma([0])
        }
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bar.tiff");
    img.save(&path).unwrap();

    let loaded = load_image(&path).unwrap();
    let a = compute_zernike_moments(&img, 8, 0.0).unwrap();
    let b = compute_zernike_moments(&loaded, 8, 0.0).unwrap();
    assert_eq!(a.count(), b.count());
    for (x, y) in a.magnitudes().iter().zip(b.magnitudes()) {
        assert!((x - y).abs() < 1e-4, "{x} vs {y}");
    }
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(
        err,
        ZernikeError::ImageError(_) | ZernikeError::Io(_)
    ));
}

#[test]
fn test_loaded_frame_matches_array_source() {
    let data = Array2::<f64>::from_shape_fn((10, 7), |(r, c)| ((r * 7 + c) % 5) as f64 / 4.0);
    let img = Gray16::from_fn(7, 10, |x, y| {
        Luma([(data[[y as usize, x as usize]] * 65535.0).round() as u16])
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.tiff");
    img.save(&path).unwrap();

    let loaded = load_image(&path).unwrap();
    for ((r, c), v) in data.indexed_iter() {
        assert!((loaded.data[[r, c]] as f64 - v).abs() < 1e-4);
    }
}
