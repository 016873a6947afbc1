mod dft_test;

use crate::core::math::ComplexNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 시드 고정 난수 복소 시퀀스
pub(super) fn random_signal(n: usize, seed: u64) -> Vec<ComplexNumber> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| ComplexNumber::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

/// 스펙트럼 최대 크기 대비 상대 오차 검사
pub(super) fn assert_spectra_close(actual: &[ComplexNumber], expected: &[ComplexNumber], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    let scale = expected.iter().map(|c| c.norm()).fold(1.0f64, f64::max);
    for (k, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).norm();
        assert!(
            diff <= tolerance * scale,
            "k={} 에서 불일치: {} vs {} (diff={:e})",
            k, a, e, diff
        );
    }
}
