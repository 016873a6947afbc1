use crate::core::error::FourierError;
use crate::core::image::{mean_squared_error, psnr, GrayscaleImage};
use approx::assert_abs_diff_eq;

#[test]
fn 비트맵_길이_검증() {
    assert_eq!(
        GrayscaleImage::new(4, 4, vec![0; 15]).unwrap_err(),
        FourierError::DimensionMismatch { expected: 16, actual: 15 }
    );
    assert!(GrayscaleImage::new(0, 4, vec![]).is_err());
    assert!(GrayscaleImage::new(2, 3, vec![0; 6]).is_ok());
}

#[test]
fn 픽셀_접근과_배열_변환() {
    let image = GrayscaleImage::from_fn(3, 2, |x, y| (10 * y + x) as u8).unwrap();
    assert_eq!(image.bitmap(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(image.pixel(2, 1), Some(12));
    assert_eq!(image.pixel(3, 0), None);

    let array = image.to_array();
    assert_eq!(array.dim(), (2, 3));
    assert_eq!(array[[1, 0]], 10);
}

#[test]
fn 평균제곱오차와_psnr() {
    let a = GrayscaleImage::filled(2, 2, 100).unwrap();
    let b = GrayscaleImage::new(2, 2, vec![100, 102, 98, 100]).unwrap();
    assert_abs_diff_eq!(mean_squared_error(&a, &b).unwrap(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(psnr(&a, &b).unwrap(), 10.0 * (65025.0f64 / 2.0).log10(), epsilon = 1e-9);
    assert_eq!(psnr(&a, &a).unwrap(), f64::INFINITY);

    let other = GrayscaleImage::filled(4, 1, 0).unwrap();
    assert!(mean_squared_error(&a, &other).is_err());
}

#[test]
fn 역직렬화도_비트맵_검증을_거친다() {
    let image = GrayscaleImage::new(2, 2, vec![1, 2, 3, 4]).unwrap();
    let json = serde_json::to_string(&image).unwrap();
    assert_eq!(serde_json::from_str::<GrayscaleImage>(&json).unwrap(), image);

    let short = r#"{"width":2,"height":2,"bitmap":[1,2,3]}"#;
    assert!(serde_json::from_str::<GrayscaleImage>(short).is_err());
    let empty = r#"{"width":0,"height":0,"bitmap":[]}"#;
    assert!(serde_json::from_str::<GrayscaleImage>(empty).is_err());
}
