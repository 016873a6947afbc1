//! rustfft 플래너 기반 변환
//!
//! 실수 입력 경로는 n 개의 실수를 n/2 개의 복소수로 묶어 절반 길이 FFT 한 번으로 처리한 뒤
//! 켤레 대칭을 이용해 전체 스펙트럼을 복원한다.

use crate::core::error::{FourierError, Result};
use crate::core::math::{expi, ComplexNumber};
use rustfft::FftPlanner;
use std::cell::RefCell;
use std::f64::consts::PI;

// 스레드별 플래너 캐시 (플랜 재사용)
thread_local! {
    static FFT_PLANNER: RefCell<FftPlanner<f64>> = RefCell::new(FftPlanner::new());
}

fn ensure_power_of_two(len: usize) -> Result<()> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(FourierError::NotPowerOfTwo { len })
    }
}

fn process_forward(buffer: &mut [ComplexNumber]) {
    let n = buffer.len();
    FFT_PLANNER.with(|planner| {
        let fft = planner.borrow_mut().plan_fft_forward(n);
        fft.process(buffer);
    });
}

/// 복소 입력 순방향 FFT (비정규화, `dft_forward` 와 같은 규약)
pub fn planned_forward(samples: &[ComplexNumber]) -> Result<Vec<ComplexNumber>> {
    ensure_power_of_two(samples.len())?;
    let mut buffer = samples.to_vec();
    process_forward(&mut buffer);
    Ok(buffer)
}

/// 실수 입력 순방향 FFT, 전체 n 개 스펙트럼 반환
pub fn planned_forward_real(values: &[f64]) -> Result<Vec<ComplexNumber>> {
    let n = values.len();
    ensure_power_of_two(n)?;
    if n == 1 {
        return Ok(vec![ComplexNumber::new(values[0], 0.0)]);
    }

    let half = n / 2;
    let mut packed: Vec<ComplexNumber> = values
        .chunks_exact(2)
        .map(|pair| ComplexNumber::new(pair[0], pair[1]))
        .collect();
    process_forward(&mut packed);

    let mut spectrum = vec![ComplexNumber::new(0.0, 0.0); n];
    for k in 0..half {
        let z = packed[k];
        let mirrored = packed[(half - k) % half].conj();
        // 짝수/홀수 인덱스 샘플의 스펙트럼 분리
        let even = (z + mirrored) * 0.5;
        let odd = (z - mirrored) * ComplexNumber::new(0.0, -0.5);
        let w = expi(-2.0 * PI * k as f64 / n as f64);
        spectrum[k] = even + w * odd;
        spectrum[k + half] = even - w * odd;
    }
    Ok(spectrum)
}
