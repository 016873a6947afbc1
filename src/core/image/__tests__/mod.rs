mod frequency_test;
mod grayscale_test;

use crate::core::image::GrayscaleImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 시드 고정 난수 이미지
pub(super) fn random_image(width: usize, height: usize, seed: u64) -> GrayscaleImage {
    let mut rng = StdRng::seed_from_u64(seed);
    GrayscaleImage::from_fn(width, height, |_, _| rng.gen()).unwrap()
}

/// 부드러운 그라디언트 + 줄무늬
pub(super) fn pattern_image(size: usize) -> GrayscaleImage {
    GrayscaleImage::from_fn(size, size, |x, y| {
        let gradient = (x + y) as f64 / (2 * size) as f64 * 160.0;
        let stripes = if (x / 4) % 2 == 0 { 60.0 } else { 0.0 };
        (gradient + stripes) as u8
    })
    .unwrap()
}
