//! 복원 품질 측정

use super::GrayscaleImage;
use crate::core::error::{FourierError, Result};
use ndarray::Array2;

fn ensure_same_shape(reference: &GrayscaleImage, approximation: &GrayscaleImage) -> Result<()> {
    if reference.width() != approximation.width() || reference.height() != approximation.height() {
        return Err(FourierError::DimensionMismatch {
            expected: reference.bitmap().len(),
            actual: approximation.bitmap().len(),
        });
    }
    Ok(())
}

/// 픽셀 평균 제곱 오차
pub fn mean_squared_error(reference: &GrayscaleImage, approximation: &GrayscaleImage) -> Result<f64> {
    ensure_same_shape(reference, approximation)?;
    let sum_sq_diff: f64 = reference
        .bitmap()
        .iter()
        .zip(approximation.bitmap().iter())
        .map(|(&r, &a)| (r as f64 - a as f64).powi(2))
        .sum();
    Ok(sum_sq_diff / reference.bitmap().len() as f64)
}

/// 양자화 전 실수 복원(`ImageDct::inverse_unquantized`)과의 평균 제곱 오차
pub fn unquantized_mean_squared_error(reference: &GrayscaleImage, approximation: &Array2<f32>) -> Result<f64> {
    if approximation.dim() != (reference.height(), reference.width()) {
        return Err(FourierError::DimensionMismatch {
            expected: reference.bitmap().len(),
            actual: approximation.len(),
        });
    }
    let reference = reference.to_array();
    let sum_sq_diff: f64 = reference
        .iter()
        .zip(approximation.iter())
        .map(|(&r, &a)| (r as f64 - a as f64).powi(2))
        .sum();
    Ok(sum_sq_diff / reference.len() as f64)
}

/// 최대 신호 대 잡음비 (dB). 두 이미지가 같으면 무한대
pub fn psnr(reference: &GrayscaleImage, approximation: &GrayscaleImage) -> Result<f64> {
    let mse = mean_squared_error(reference, approximation)?;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (255.0f64 * 255.0 / mse).log10())
}
