//! 복소수 산술 기본 요소

pub mod complex;


// 재수출
pub use complex::{complex_from_point, expi, Complex, ComplexExt, ComplexNumber, I};
