//! # 이미지 DCT 코덱
//!
//! 8비트 그레이스케일 이미지를 분리형 2D DCT-II 로 주파수 격자로 바꾸고,
//! 지그재그 순서로 계수를 0 으로 만든 뒤 DCT-III 로 복원한다.

pub mod dct;
pub mod frequency;
pub mod grayscale;
pub mod metrics;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use dct::ImageDct;
pub use frequency::{zigzag_order, FrequencyData};
pub use grayscale::GrayscaleImage;
pub use metrics::{mean_squared_error, psnr, unquantized_mean_squared_error};

/// 순방향 변환 (`ImageDct::forward`)
pub fn dct_forward(image: &GrayscaleImage) -> FrequencyData {
    ImageDct::forward(image)
}

/// 역변환 (`ImageDct::inverse`)
pub fn dct_inverse(frequency_data: &FrequencyData) -> GrayscaleImage {
    ImageDct::inverse(frequency_data)
}
