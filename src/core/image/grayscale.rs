//! 8비트 그레이스케일 비트맵

use crate::core::error::{FourierError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 행 우선 8비트 그레이스케일 이미지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrayscale")]
pub struct GrayscaleImage {
    width: usize,
    height: usize,
    bitmap: Vec<u8>,
}

/// 검증 전 역직렬화 형태
#[derive(Deserialize)]
struct RawGrayscale {
    width: usize,
    height: usize,
    bitmap: Vec<u8>,
}

impl TryFrom<RawGrayscale> for GrayscaleImage {
    type Error = FourierError;

    fn try_from(raw: RawGrayscale) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.bitmap)
    }
}

impl GrayscaleImage {
    pub fn new(width: usize, height: usize, bitmap: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FourierError::EmptySamples);
        }
        if bitmap.len() != width * height {
            return Err(FourierError::DimensionMismatch {
                expected: width * height,
                actual: bitmap.len(),
            });
        }
        Ok(Self { width, height, bitmap })
    }

    pub(super) fn from_parts(width: usize, height: usize, bitmap: Vec<u8>) -> Self {
        debug_assert_eq!(bitmap.len(), width * height);
        Self { width, height, bitmap }
    }

    /// 모든 픽셀이 `value` 인 이미지
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        Self::new(width, height, vec![value; width * height])
    }

    /// 픽셀 함수 `f(x, y)` 로 이미지 생성
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let bitmap = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::new(width, height, bitmap)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.bitmap[y * self.width + x])
        } else {
            None
        }
    }

    /// (height, width) 모양의 배열
    pub fn to_array(&self) -> Array2<u8> {
        Array2::from_shape_fn((self.height, self.width), |(y, x)| self.bitmap[y * self.width + x])
    }
}
