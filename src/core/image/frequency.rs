//! 주파수 계수 격자와 지그재그 절단

use crate::core::error::{FourierError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 정사각형 격자의 지그재그(반대각선) 순회 순서
///
/// 대각선 d = 0..2n-2 를 차례로 방문하고, d 가 홀수면 행이 증가하는 방향,
/// 짝수면 열이 증가하는 방향으로 진행한다 (JPEG 스캔 순서).
pub fn zigzag_order(n: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(n * n);
    if n == 0 {
        return order;
    }
    for diag in 0..(2 * n - 1) {
        let min_index = diag.saturating_sub(n - 1);
        let max_index = min_index + diag.min(2 * (n - 1) - diag);
        for i in min_index..=max_index {
            if diag % 2 != 0 {
                order.push((i, diag - i));
            } else {
                order.push((diag - i, i));
            }
        }
    }
    order
}

/// (height, width) 실수 계수 격자. 순방향 변환마다 새로 만들어진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f32>", into = "Array2<f32>")]
pub struct FrequencyData {
    data: Array2<f32>,
}

// 역직렬화도 `from_array` 검증을 거친다
impl TryFrom<Array2<f32>> for FrequencyData {
    type Error = FourierError;

    fn try_from(data: Array2<f32>) -> Result<Self> {
        Self::from_array(data)
    }
}

impl From<FrequencyData> for Array2<f32> {
    fn from(frequency_data: FrequencyData) -> Self {
        frequency_data.data
    }
}

impl FrequencyData {
    /// 행 우선 계수 벡터로 생성
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FourierError::EmptySamples);
        }
        let actual = data.len();
        let data = Array2::from_shape_vec((height, width), data).map_err(|_| {
            FourierError::DimensionMismatch {
                expected: width * height,
                actual,
            }
        })?;
        Ok(Self { data })
    }

    pub fn from_array(data: Array2<f32>) -> Result<Self> {
        if data.is_empty() {
            return Err(FourierError::EmptySamples);
        }
        Ok(Self { data })
    }

    /// 변환 결과 배열을 그대로 감싼다 (크기 검증 생략)
    pub(super) fn from_transform(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get((row, col)).copied()
    }

    /// 행 우선 계수 벡터
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    pub fn nonzero_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// 지그재그 연산 전제 조건: 정사각형, 0 ≤ count ≤ n²
    fn zigzag_side(&self, count: usize) -> Result<usize> {
        let (width, height) = (self.width(), self.height());
        if width != height {
            return Err(FourierError::NonSquareGrid { width, height });
        }
        let capacity = width * height;
        if count > capacity {
            return Err(FourierError::DropCountOutOfRange { count, capacity });
        }
        Ok(width)
    }

    /// 고주파(오른쪽 아래) 끝에서부터 지그재그 순서로 `count` 개를 0 으로
    pub fn drop_last(&self, count: usize) -> Result<Self> {
        let n = self.zigzag_side(count)?;
        let mut data = self.data.clone();
        for &(row, col) in zigzag_order(n).iter().rev().take(count) {
            data[[row, col]] = 0.0;
        }
        Ok(Self { data })
    }

    /// 저주파(DC) 끝에서부터 지그재그 순서로 `count` 개를 0 으로
    pub fn drop_first(&self, count: usize) -> Result<Self> {
        let n = self.zigzag_side(count)?;
        let mut data = self.data.clone();
        for &(row, col) in zigzag_order(n).iter().take(count) {
            data[[row, col]] = 0.0;
        }
        Ok(Self { data })
    }

    /// 압축 비율 → `drop_last(floor(n² · ratio))`
    ///
    /// 곱은 f32 로 계산한다 (10×10, 0.29 → 29 개).
    pub fn compress(&self, ratio: f32) -> Result<Self> {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(FourierError::InvalidRatio { ratio });
        }
        let cells = self.width() * self.height();
        let count = (cells as f32 * ratio) as usize;
        self.drop_last(count)
    }
}
