//! # 푸리에 급수 모델
//!
//! 두 가지 변형이 같은 능력 집합(`FourierSeries`)을 공유한다.
//! - `PeriodicSeries`: 주기적 실수 신호 (1D)
//! - `ClosedPathSeries`: 닫힌 매개변수 경로 (2D)
//!
//! 인스턴스는 입력마다 한 번 만들어지고 이후 변경되지 않는다.
//! 경로나 최대 주파수가 바뀌면 새 인스턴스를 만든다.

pub mod closed_path;
pub mod path;
pub mod periodic;
pub mod signals;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

use crate::core::error::Result;
use crate::core::math::ComplexNumber;
use serde::{Deserialize, Serialize};

// 재수출
pub use closed_path::ClosedPathSeries;
pub use path::ClosedPolyline;
pub use periodic::PeriodicSeries;

/// 회전 벡터 하나: (부호 있는 주파수, 시각 t 에서의 값)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyComponent {
    pub frequency: isize,
    pub value: ComplexNumber,
}

impl FrequencyComponent {
    pub fn new(frequency: isize, value: ComplexNumber) -> Self {
        Self { frequency, value }
    }

    /// 에피사이클 원의 반지름
    pub fn radius(&self) -> f64 {
        self.value.norm()
    }
}

impl approx::AbsDiffEq for FrequencyComponent {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.frequency == other.frequency
            && (self.value.re - other.value.re).abs() <= epsilon
            && (self.value.im - other.value.im).abs() <= epsilon
    }
}

/// 그리기 협력자용 표시 영역. 변환 알고리즘은 이 값을 쓰지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// 샘플 좌표의 점을 표시 영역 원점 기준 좌표로 옮긴다
    pub fn to_view(&self, point: ComplexNumber) -> (f64, f64) {
        (point.re - self.x, point.im - self.y)
    }
}

/// 두 급수 변형이 공유하는 능력 집합
pub trait FourierSeries {
    /// 변환에 사용된 샘플 (실수 신호는 허수부 0)
    fn samples(&self) -> &[ComplexNumber];
    fn bounds(&self) -> Bounds;
    /// 정규화된 주파수 계수
    fn frequency_components(&self) -> &[ComplexNumber];
    fn maximum_frequency(&self) -> usize;
    /// 시각 `time` 에서 |주파수| ≤ `frequency_limit` 인 회전 벡터들을 그리기 순서대로 반환
    fn enumerate(&self, time: f64, frequency_limit: usize) -> Vec<FrequencyComponent>;
}

/// 닫힌 합 타입: 1D 또는 2D 급수
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Periodic(PeriodicSeries),
    ClosedPath(ClosedPathSeries),
}

impl Series {
    fn inner(&self) -> &dyn FourierSeries {
        match self {
            Series::Periodic(series) => series,
            Series::ClosedPath(series) => series,
        }
    }
}

impl FourierSeries for Series {
    fn samples(&self) -> &[ComplexNumber] {
        self.inner().samples()
    }

    fn bounds(&self) -> Bounds {
        self.inner().bounds()
    }

    fn frequency_components(&self) -> &[ComplexNumber] {
        self.inner().frequency_components()
    }

    fn maximum_frequency(&self) -> usize {
        self.inner().maximum_frequency()
    }

    fn enumerate(&self, time: f64, frequency_limit: usize) -> Vec<FrequencyComponent> {
        self.inner().enumerate(time, frequency_limit)
    }
}

impl From<PeriodicSeries> for Series {
    fn from(series: PeriodicSeries) -> Self {
        Series::Periodic(series)
    }
}

impl From<ClosedPathSeries> for Series {
    fn from(series: ClosedPathSeries) -> Self {
        Series::ClosedPath(series)
    }
}

/// 실수 샘플로 1D 주기 급수 생성 (정의식 DFT 사용)
pub fn build_1d_series(real_samples: &[f64]) -> Result<Series> {
    PeriodicSeries::new(real_samples).map(Series::from)
}

/// 경로 점들로 2D 닫힌 경로 급수 생성 (주파수 -m..=m)
pub fn build_2d_series(path_points: &[ComplexNumber], maximum_frequency: usize) -> Result<Series> {
    ClosedPathSeries::new(path_points, maximum_frequency).map(Series::from)
}
