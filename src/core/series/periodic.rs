//! 주기적 실수 신호 (1D) 급수

use super::{Bounds, FourierSeries, FrequencyComponent};
use crate::core::error::{FourierError, Result};
use crate::core::math::{expi, ComplexNumber};
use crate::core::transform::TransformEngine;
use std::f64::consts::PI;
use std::time::Instant;

/// 표시 영역 높이 (고정값)
const BOUNDS_HEIGHT: f64 = 512.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicSeries {
    samples: Vec<ComplexNumber>,
    // 인덱스 0, 1, 2, ... n-1 (n/2 초과는 음의 주파수)
    frequency_components: Vec<ComplexNumber>,
    maximum_frequency: usize,
    bounds: Bounds,
}

impl PeriodicSeries {
    pub fn new(real_samples: &[f64]) -> Result<Self> {
        Self::with_engine(real_samples, TransformEngine::Dft)
    }

    /// 지정한 엔진으로 계수를 계산. FFT 계열은 길이 계약을 그대로 따른다.
    pub fn with_engine(real_samples: &[f64], engine: TransformEngine) -> Result<Self> {
        if real_samples.is_empty() {
            return Err(FourierError::EmptySamples);
        }

        let samples: Vec<ComplexNumber> = real_samples
            .iter()
            .map(|&x| ComplexNumber::new(x, 0.0))
            .collect();
        let n = samples.len() as f64;

        let start = Instant::now();
        let frequency_components: Vec<ComplexNumber> = engine
            .forward(&samples)?
            .into_iter()
            .map(|c| c / n)
            .collect();
        log::debug!(
            "periodic series: {} samples, engine={}, elapsed={:?}",
            samples.len(),
            engine.name(),
            start.elapsed()
        );

        let max = real_samples.iter().copied().fold(f64::MIN, f64::max);
        let min = real_samples.iter().copied().fold(f64::MAX, f64::min);
        let extent = max.abs().max(min.abs()) * 1.2;

        Ok(Self {
            maximum_frequency: samples.len(),
            samples,
            frequency_components,
            bounds: Bounds {
                x: -extent,
                y: 0.0,
                width: extent * 2.0,
                height: BOUNDS_HEIGHT,
            },
        })
    }

    /// 원시 인덱스의 실제(표시) 주파수. n/2 초과 인덱스는 -(n - i), 범위 밖이면 None
    pub fn displayed_frequency(&self, index: usize) -> Option<isize> {
        let n = self.frequency_components.len();
        (index < n).then(|| aliased_frequency(index, n))
    }
}

fn aliased_frequency(index: usize, n: usize) -> isize {
    if index > n / 2 {
        -((n - index) as isize)
    } else {
        index as isize
    }
}

impl FourierSeries for PeriodicSeries {
    fn samples(&self) -> &[ComplexNumber] {
        &self.samples
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn frequency_components(&self) -> &[ComplexNumber] {
        &self.frequency_components
    }

    fn maximum_frequency(&self) -> usize {
        self.maximum_frequency
    }

    fn enumerate(&self, time: f64, frequency_limit: usize) -> Vec<FrequencyComponent> {
        let n = self.frequency_components.len();
        self.frequency_components
            .iter()
            .enumerate()
            .filter_map(|(index, &component)| {
                let frequency = aliased_frequency(index, n);
                if frequency.unsigned_abs() > frequency_limit {
                    return None;
                }
                // 위상은 별칭 주파수가 아닌 원시 인덱스로 회전시킨다.
                // 별칭 주파수를 쓰면 시간 간격이 1/n 으로 제한되지 않는다.
                let value = component * expi(index as f64 * 2.0 * PI * time);
                Some(FrequencyComponent::new(frequency, value))
            })
            .collect()
    }
}
