//! 복소수 타입과 보조 연산
//!
//! 덧셈, 뺄셈, 곱셈, 나눗셈, 켤레(`conj`)는 `num_complex::Complex`가 그대로 제공한다.
//! 여기서는 순허수 지수와 길이, 2D 점 변환만 덧붙인다.

pub use rustfft::num_complex::Complex;

/// 코어 전체에서 쓰는 배정밀도 복소수
pub type ComplexNumber = Complex<f64>;

/// 허수 단위 i
pub const I: ComplexNumber = Complex::new(0.0, 1.0);

/// 순허수 지수 e^(iθ)
///
/// 오일러 항등식 실험의 단위 페이저도 이 함수 하나로 표현된다.
#[inline]
pub fn expi(theta: f64) -> ComplexNumber {
    let (sin, cos) = theta.sin_cos();
    Complex::new(cos, sin)
}

/// (x, y) 점을 x + iy 로 변환
#[inline]
pub fn complex_from_point(x: f64, y: f64) -> ComplexNumber {
    Complex::new(x, y)
}

/// 그리기 협력자가 쓰는 편의 메서드
pub trait ComplexExt {
    /// 크기 |z| (회전 벡터의 반지름)
    fn length(&self) -> f64;
    /// (실수부, 허수부) 점
    fn to_point(&self) -> (f64, f64);
}

impl ComplexExt for ComplexNumber {
    #[inline]
    fn length(&self) -> f64 {
        self.norm()
    }

    #[inline]
    fn to_point(&self) -> (f64, f64) {
        (self.re, self.im)
    }
}
