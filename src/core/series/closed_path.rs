//! 닫힌 경로 (2D) 급수

use super::{Bounds, ClosedPolyline, FourierSeries, FrequencyComponent};
use crate::core::error::{FourierError, Result};
use crate::core::math::{expi, ComplexNumber};
use rayon::prelude::*;
use std::f64::consts::PI;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPathSeries {
    samples: Vec<ComplexNumber>,
    // -m ... -1, 0, 1, ... m  (주파수 f 는 인덱스 m + f)
    frequency_components: Vec<ComplexNumber>,
    maximum_frequency: usize,
    bounds: Bounds,
}

impl ClosedPathSeries {
    /// `coefficient[f] = (1/n) Σ_j point[j] · e^(-i·2π·f·j/n)`, f ∈ [-m, m]
    pub fn new(path_points: &[ComplexNumber], maximum_frequency: usize) -> Result<Self> {
        if path_points.is_empty() {
            return Err(FourierError::EmptySamples);
        }

        let start = Instant::now();
        let n = path_points.len() as isize;
        let m = maximum_frequency as isize;

        let frequency_components: Vec<ComplexNumber> = (-m..=m)
            .into_par_iter()
            .map(|frequency| {
                let sum = path_points
                    .iter()
                    .enumerate()
                    .fold(ComplexNumber::new(0.0, 0.0), |sum, (index, &point)| {
                        let t = (frequency * index as isize).rem_euclid(n) as f64 / n as f64;
                        sum + point * expi(-2.0 * PI * t)
                    });
                sum / n as f64
            })
            .collect();

        log::debug!(
            "closed path series: {} points, m={}, elapsed={:?}",
            path_points.len(),
            maximum_frequency,
            start.elapsed()
        );

        Ok(Self {
            samples: path_points.to_vec(),
            frequency_components,
            maximum_frequency,
            bounds: padded_bounding_box(path_points),
        })
    }

    /// 닫힌 꺾은선을 단위 호 길이로 샘플링해 급수 생성
    pub fn from_polyline(polyline: &ClosedPolyline, maximum_frequency: usize) -> Result<Self> {
        Self::new(&polyline.unit_arc_samples(), maximum_frequency)
    }

    /// 주파수 f 의 계수 (|f| > m 이면 None)
    pub fn coefficient(&self, frequency: isize) -> Option<ComplexNumber> {
        let index = self.maximum_frequency as isize + frequency;
        usize::try_from(index)
            .ok()
            .and_then(|index| self.frequency_components.get(index).copied())
    }

    fn component_at(&self, frequency: isize, time: f64) -> FrequencyComponent {
        let index = (self.maximum_frequency as isize + frequency) as usize;
        let value = self.frequency_components[index] * expi(frequency as f64 * 2.0 * PI * time);
        FrequencyComponent::new(frequency, value)
    }
}

impl FourierSeries for ClosedPathSeries {
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

    /// 순서: 0, +1, -1, +2, -2, ... (부분합 누적 그리기에 필요한 순서)
    fn enumerate(&self, time: f64, frequency_limit: usize) -> Vec<FrequencyComponent> {
        let limit = frequency_limit.min(self.maximum_frequency) as isize;
        let mut components = Vec::with_capacity(2 * limit as usize + 1);
        components.push(self.component_at(0, time));
        for frequency in 1..=limit {
            components.push(self.component_at(frequency, time));
            components.push(self.component_at(-frequency, time));
        }
        components
    }
}

/// 샘플 경계 상자를 가로/세로 절반씩 사방으로 넓힌 영역
fn padded_bounding_box(points: &[ComplexNumber]) -> Bounds {
    let (min_x, max_x, min_y, max_y) = points.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.re), max_x.max(p.re), min_y.min(p.im), max_y.max(p.im))
        },
    );
    let width = max_x - min_x;
    let height = max_y - min_y;
    Bounds {
        x: min_x - width / 2.0,
        y: min_y - height / 2.0,
        width: width * 2.0,
        height: height * 2.0,
    }
}
