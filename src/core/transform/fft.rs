//! Radix-2 Cooley–Tukey FFT
//!
//! 재귀 분할 대신 비트 반전 순열 + 제자리 버터플라이로 구현한다.
//! 한 번 할당한 버퍼 위에서 모든 단계가 진행된다.

use crate::core::error::{FourierError, Result};
use crate::core::math::{expi, ComplexNumber};
use rayon::prelude::*;
use std::f64::consts::PI;
use std::time::Instant;

/// 이 길이 이상에서만 같은 단계의 버터플라이 묶음을 병렬 처리
const PARALLEL_THRESHOLD: usize = 1 << 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// 순방향 FFT. 결과는 `dft_forward` 와 부동소수점 허용 오차 내에서 같다.
///
/// 입력 길이가 2의 거듭제곱이 아니면 `FourierError::NotPowerOfTwo`.
pub fn fft_forward(samples: &[ComplexNumber]) -> Result<Vec<ComplexNumber>> {
    let start = Instant::now();
    let mut buffer = samples.to_vec();
    transform_in_place(&mut buffer, Direction::Forward)?;
    log::debug!("fft_forward n={} elapsed={:?}", samples.len(), start.elapsed());
    Ok(buffer)
}

/// 역 FFT (1/n 정규화 포함). `fft_inverse(fft_forward(x)) ≈ x`
pub fn fft_inverse(coefficients: &[ComplexNumber]) -> Result<Vec<ComplexNumber>> {
    let mut buffer = coefficients.to_vec();
    transform_in_place(&mut buffer, Direction::Inverse)?;
    let scale = 1.0 / buffer.len() as f64;
    Ok(buffer.into_iter().map(|c| c * scale).collect())
}

fn transform_in_place(buffer: &mut [ComplexNumber], direction: Direction) -> Result<()> {
    let n = buffer.len();
    if !n.is_power_of_two() {
        return Err(FourierError::NotPowerOfTwo { len: n });
    }
    if n == 1 {
        return Ok(());
    }

    bit_reverse_permute(buffer);

    // 트위들 인자 e^(±i·2π·k/n), k < n/2
    let twiddles: Vec<ComplexNumber> = (0..n / 2)
        .map(|k| expi(direction.sign() * 2.0 * PI * k as f64 / n as f64))
        .collect();

    let mut len = 2;
    while len <= n {
        let stride = n / len;
        let half = len / 2;
        let twiddles = &twiddles;
        let butterfly = move |chunk: &mut [ComplexNumber]| {
            let (even, odd) = chunk.split_at_mut(half);
            for k in 0..half {
                let t = twiddles[k * stride] * odd[k];
                let e = even[k];
                even[k] = e + t;
                odd[k] = e - t;
            }
        };

        // 같은 단계의 묶음끼리는 서로 겹치지 않는 구간을 소유한다
        if n >= PARALLEL_THRESHOLD && stride > 1 {
            buffer.par_chunks_mut(len).for_each(butterfly);
        } else {
            buffer.chunks_mut(len).for_each(butterfly);
        }
        len <<= 1;
    }
    Ok(())
}

fn bit_reverse_permute(buffer: &mut [ComplexNumber]) {
    let n = buffer.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buffer.swap(i, j);
        }
    }
}
