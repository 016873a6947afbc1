//! 정의식 DFT (O(n²))

use crate::core::math::{expi, ComplexNumber};
use rayon::prelude::*;
use std::f64::consts::PI;
use std::time::Instant;

/// 순방향 DFT: `X[k] = Σ_j x[j] · e^(-i·2π·k·j/n)`
///
/// 길이 제한이 없다. 출력 주파수별 합은 서로 독립이므로 rayon 으로 병렬 계산한다.
pub fn dft_forward(samples: &[ComplexNumber]) -> Vec<ComplexNumber> {
    let start = Instant::now();
    let n = samples.len();

    let components: Vec<ComplexNumber> = (0..n)
        .into_par_iter()
        .map(|frequency| {
            samples
                .iter()
                .enumerate()
                .fold(ComplexNumber::new(0.0, 0.0), |sum, (index, &sample)| {
                    // k·j 를 n 으로 나눈 나머지만 위상에 반영 (큰 n 에서 위상 오차 억제)
                    let t = ((frequency * index) % n) as f64 / n as f64;
                    sum + sample * expi(-2.0 * PI * t)
                })
        })
        .collect();

    log::debug!("dft_forward n={} elapsed={:?}", n, start.elapsed());
    components
}

/// 역 DFT: 켤레 → 순방향 → 켤레 → 1/n 스케일
pub fn dft_inverse(coefficients: &[ComplexNumber]) -> Vec<ComplexNumber> {
    let n = coefficients.len() as f64;
    let conjugated: Vec<ComplexNumber> = coefficients.iter().map(|c| c.conj()).collect();
    dft_forward(&conjugated)
        .into_iter()
        .map(|c| c.conj() / n)
        .collect()
}
