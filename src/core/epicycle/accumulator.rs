//! 부분합 누적 (상태 없음)

use crate::core::math::ComplexNumber;
use crate::core::series::{FourierSeries, FrequencyComponent};

/// 한 시각의 누적 결과
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleFrame {
    pub origin: ComplexNumber,
    /// 각 항을 더한 직후의 부분합
    pub joints: Vec<ComplexNumber>,
    /// 각 항의 크기 (원 반지름)
    pub radii: Vec<f64>,
    /// 최종 위치 = origin + Σ value
    pub position: ComplexNumber,
}

impl EpicycleFrame {
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// (원 중심, 반지름) 쌍. i 번째 원의 중심은 직전 부분합이다.
    pub fn circles(&self) -> impl Iterator<Item = (ComplexNumber, f64)> + '_ {
        std::iter::once(self.origin)
            .chain(self.joints.iter().copied())
            .zip(self.radii.iter().copied())
    }
}

/// |주파수| ≤ `frequency_limit` 인 항만 순서대로 더한다.
pub fn accumulate<I>(components: I, origin: ComplexNumber, frequency_limit: usize) -> EpicycleFrame
where
    I: IntoIterator<Item = FrequencyComponent>,
{
    let mut position = origin;
    let mut joints = Vec::new();
    let mut radii = Vec::new();

    for component in components {
        if component.frequency.unsigned_abs() > frequency_limit {
            continue;
        }
        radii.push(component.radius());
        position += component.value;
        joints.push(position);
    }

    EpicycleFrame {
        origin,
        joints,
        radii,
        position,
    }
}

/// 급수를 시각 `time` 에서 평가한 재구성 점
pub fn reconstruct<S>(series: &S, time: f64, frequency_limit: usize, origin: ComplexNumber) -> ComplexNumber
where
    S: FourierSeries + ?Sized,
{
    series
        .enumerate(time, frequency_limit)
        .into_iter()
        .fold(origin, |position, component| position + component.value)
}
