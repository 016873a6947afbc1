use super::{assert_spectra_close, random_signal};
use crate::core::math::ComplexNumber;
use crate::core::transform::{dft_forward, dft_inverse};
use approx::assert_abs_diff_eq;

#[test]
fn 사인파_스펙트럼은_주파수_2에만_존재한다() {
    let samples: Vec<ComplexNumber> = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0]
        .iter()
        .map(|&x| ComplexNumber::new(x, 0.0))
        .collect();
    let spectrum = dft_forward(&samples);

    for (k, c) in spectrum.iter().enumerate() {
        if k == 2 || k == 6 {
            assert!(c.norm() > 1.0, "k={} 계수가 0 이면 안 됨: {}", k, c);
        } else {
            assert_abs_diff_eq!(c.norm(), 0.0, epsilon = 1e-9);
        }
    }
    // sin 성분: X[2] = -4i, X[6] = +4i
    assert_abs_diff_eq!(spectrum[2].im, -4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(spectrum[6].im, 4.0, epsilon = 1e-9);
}

#[test]
fn 역변환_왕복_복원_테스트() {
    for &n in &[1usize, 2, 3, 5, 7, 12, 31, 100] {
        let signal = random_signal(n, n as u64);
        let restored = dft_inverse(&dft_forward(&signal));
        for (a, b) in signal.iter().zip(restored.iter()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
        }
    }
}

#[test]
fn 상수_신호는_직류_성분만_가진다() {
    let samples = vec![ComplexNumber::new(2.5, 0.0); 9];
    let spectrum = dft_forward(&samples);
    let mut expected = vec![ComplexNumber::new(0.0, 0.0); 9];
    expected[0] = ComplexNumber::new(22.5, 0.0);
    assert_spectra_close(&spectrum, &expected, 1e-12);
}

#[test]
fn 빈_입력은_빈_출력() {
    assert!(dft_forward(&[]).is_empty());
    assert!(dft_inverse(&[]).is_empty());
}
