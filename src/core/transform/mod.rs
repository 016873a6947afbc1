//! # 이산 푸리에 변환 엔진
//!
//! - `dft`: 임의 길이에 대한 O(n²) 정의식 변환
//! - `fft`: 2의 거듭제곱 길이 전용 radix-2 Cooley–Tukey 변환
//! - `planned`: rustfft 플래너 기반 변환 (가속 경로)
//!
//! 모든 엔진은 상태 없는 순수 함수이며 서로 다른 입력에 대해 동시에 호출해도 안전하다.

pub mod dft;
pub mod fft;
pub mod planned;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

use crate::core::error::Result;
use crate::core::math::ComplexNumber;
use serde::{Deserialize, Serialize};

// 재수출
pub use dft::{dft_forward, dft_inverse};
pub use fft::{fft_forward, fft_inverse};
pub use planned::{planned_forward, planned_forward_real};

/// 순방향 변환에 사용할 엔진
///
/// 길이 조건을 만족하지 않으면 다른 엔진으로 대체하지 않고 오류를 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformEngine {
    #[default]
    Dft,
    Fft,
    Planned,
}

impl TransformEngine {
    pub fn forward(&self, samples: &[ComplexNumber]) -> Result<Vec<ComplexNumber>> {
        match self {
            TransformEngine::Dft => Ok(dft_forward(samples)),
            TransformEngine::Fft => fft_forward(samples),
            TransformEngine::Planned => planned_forward(samples),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformEngine::Dft => "dft",
            TransformEngine::Fft => "fft",
            TransformEngine::Planned => "planned",
        }
    }
}
