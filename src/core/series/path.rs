//! 닫힌 꺾은선과 단위 호 길이 샘플링

use crate::core::error::{FourierError, Result};
use crate::core::math::{complex_from_point, ComplexNumber};
use serde::{Deserialize, Serialize};

/// 마지막 꼭짓점에서 첫 꼭짓점으로 닫히는 꺾은선
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPolyline {
    vertices: Vec<(f64, f64)>,
}

impl ClosedPolyline {
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(FourierError::EmptySamples);
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % count]))
    }

    /// 닫는 선분을 포함한 전체 길이
    pub fn length(&self) -> f64 {
        self.segments()
            .map(|((x0, y0), (x1, y1))| (x1 - x0).hypot(y1 - y0))
            .sum()
    }

    /// 시작점에서 호 길이 `s` 만큼 진행한 점. 범위를 벗어나면 None
    pub fn point_at_length(&self, s: f64) -> Option<ComplexNumber> {
        if !(0.0..=self.length()).contains(&s) {
            return None;
        }
        let mut travelled = 0.0;
        for ((x0, y0), (x1, y1)) in self.segments() {
            let segment = (x1 - x0).hypot(y1 - y0);
            if segment > 0.0 && s <= travelled + segment {
                let u = (s - travelled) / segment;
                return Some(complex_from_point(x0 + (x1 - x0) * u, y0 + (y1 - y0) * u));
            }
            travelled += segment;
        }
        // 길이 0 인 경로 또는 누적 오차로 끝을 넘은 경우
        let (x, y) = self.vertices[0];
        Some(complex_from_point(x, y))
    }

    /// 호 길이 0, 1, 2, ... (< 전체 길이) 위치의 점들
    pub fn unit_arc_samples(&self) -> Vec<ComplexNumber> {
        let count = self.length().floor() as usize;
        let mut samples = Vec::with_capacity(count);
        let mut next = 0.0;
        let mut travelled = 0.0;
        for ((x0, y0), (x1, y1)) in self.segments() {
            let segment = (x1 - x0).hypot(y1 - y0);
            while samples.len() < count && segment > 0.0 && next <= travelled + segment {
                let u = (next - travelled) / segment;
                samples.push(complex_from_point(x0 + (x1 - x0) * u, y0 + (y1 - y0) * u));
                next += 1.0;
            }
            travelled += segment;
        }
        samples
    }
}
