//! 변환 코어의 오류 타입
//!
//! 모든 오류는 계산 전에 검출되는 인자 계약 위반이다.
//! 부동소수점 누적 오차는 오류로 다루지 않는다.

use std::fmt;

/// 푸리에/DCT 코어에서 발생하는 오류
#[derive(Debug, Clone, PartialEq)]
pub enum FourierError {
    /// 샘플 시퀀스가 비어 있음
    EmptySamples,
    /// FFT 입력 길이가 2의 거듭제곱이 아님
    NotPowerOfTwo {
        /// 실제 입력 길이
        len: usize,
    },
    /// 지그재그 연산에 정사각형이 아닌 격자가 주어짐
    NonSquareGrid { width: usize, height: usize },
    /// 제거할 계수 개수가 격자 크기를 넘음
    DropCountOutOfRange { count: usize, capacity: usize },
    /// 버퍼 길이가 선언된 크기와 맞지 않음
    DimensionMismatch { expected: usize, actual: usize },
    /// 압축 비율이 [0, 1] 밖이거나 유한하지 않음
    InvalidRatio { ratio: f32 },
}

impl FourierError {
    /// 이 코어의 오류는 전부 invalid-argument 범주에 속한다.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            FourierError::EmptySamples
            | FourierError::NotPowerOfTwo { .. }
            | FourierError::NonSquareGrid { .. }
            | FourierError::DropCountOutOfRange { .. }
            | FourierError::DimensionMismatch { .. }
            | FourierError::InvalidRatio { .. } => true,
        }
    }
}

impl fmt::Display for FourierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FourierError::EmptySamples => write!(f, "Invalid argument: sample sequence is empty"),
            FourierError::NotPowerOfTwo { len } => {
                write!(f, "Invalid argument: length {len} is not a power of two")
            }
            FourierError::NonSquareGrid { width, height } => {
                write!(f, "Invalid argument: grid {width}x{height} is not square")
            }
            FourierError::DropCountOutOfRange { count, capacity } => {
                write!(f, "Invalid argument: drop count {count} exceeds grid size {capacity}")
            }
            FourierError::DimensionMismatch { expected, actual } => {
                write!(f, "Invalid argument: expected {expected} values, got {actual}")
            }
            FourierError::InvalidRatio { ratio } => {
                write!(f, "Invalid argument: compression ratio {ratio} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for FourierError {}

pub type Result<T> = std::result::Result<T, FourierError>;
