//! 데모 및 테스트용 입력 생성기

use super::ClosedPolyline;
use crate::core::error::Result;
use crate::core::math::{expi, ComplexNumber};
use rand::Rng;
use std::f64::consts::PI;

/// 데모 파형 `(sin t + |sin 2t| + sin 5t + cos 6t + sin 12t) · amplitude`, t = 2π·i/n
pub fn demo_signal(n: usize, amplitude: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n as f64 / (PI * 2.0));
            (t.sin() + (2.0 * t).sin().abs() + (5.0 * t).sin() + (6.0 * t).cos() + (12.0 * t).sin())
                * amplitude
        })
        .collect()
}

/// 반지름 `radius` 원 위의 등간격 점 n 개
pub fn circle_points(n: usize, radius: f64) -> Vec<ComplexNumber> {
    (0..n)
        .map(|j| expi(2.0 * PI * j as f64 / n as f64) * radius)
        .collect()
}

/// 정다각형 꼭짓점으로 만든 닫힌 꺾은선
pub fn regular_polygon(sides: usize, radius: f64) -> Result<ClosedPolyline> {
    let vertices = (0..sides)
        .map(|k| {
            let theta = 2.0 * PI * k as f64 / sides as f64;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    ClosedPolyline::new(vertices)
}

/// [-amplitude, amplitude] 균등 분포 실수 샘플
pub fn random_samples<R: Rng>(n: usize, rng: &mut R, amplitude: f64) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-amplitude..=amplitude)).collect()
}
