//! # 구성 설정
//!
//! 궤적 옵션, 이미지 DCT 실험 설정, 변환 엔진 선택을 묶는다.

use crate::core::error::FourierError;
use crate::core::transform::TransformEngine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 에피사이클 궤적 옵션
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerOptions {
    /// 누적 시작점. 샘플 좌표계 기준이며 급수의 표시 영역(`Bounds`)을 빼지 않는다.
    /// 화면 좌표가 필요하면 그리기 쪽에서 `Bounds::to_view` 로 옮긴다.
    pub pen_origin: (f64, f64),
    /// 프레임마다 궤적을 y 방향으로 1 씩 밀어 올림 (1D 신호용)
    pub rolls_paper: bool,
    /// 그리기 협력자에게 샘플 점 표시 요청
    pub draws_samples: bool,
    /// 보관할 최대 궤적 조각 수 (None 이면 무제한)
    pub max_segments: Option<usize>,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self::closed_path()
    }
}

impl TracerOptions {
    /// 1D 주기 신호 프리셋
    pub fn periodic() -> Self {
        Self {
            pen_origin: (0.0, 128.0),
            rolls_paper: true,
            draws_samples: false,
            max_segments: Some(512),
        }
    }

    /// 2D 닫힌 경로 프리셋
    pub fn closed_path() -> Self {
        Self {
            pen_origin: (0.0, 0.0),
            rolls_paper: false,
            draws_samples: true,
            max_segments: None,
        }
    }
}

/// 이미지 DCT 실험 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDctConfig {
    /// 정사각형 이미지 한 변 크기
    pub image_size: usize,
    /// 지그재그 끝에서 버릴 계수 비율 [0, 1]
    pub compression: f32,
}

impl Default for ImageDctConfig {
    fn default() -> Self {
        Self {
            image_size: 64,
            compression: 0.0,
        }
    }
}

/// 전체 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierConfig {
    pub engine: TransformEngine,
    /// 2D 급수 최대 주파수
    pub maximum_frequency: usize,
    pub tracer: TracerOptions,
    pub image: ImageDctConfig,
    /// rayon 스레드 수 (None 이면 CPU 코어 수)
    pub threads: Option<usize>,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            engine: TransformEngine::Dft,
            maximum_frequency: 50,
            tracer: TracerOptions::default(),
            image: ImageDctConfig::default(),
            threads: None,
        }
    }
}

impl FourierConfig {
    /// 빠른 미리보기 프리셋
    pub fn fast() -> Self {
        Self {
            engine: TransformEngine::Fft,
            maximum_frequency: 20,
            image: ImageDctConfig {
                image_size: 32,
                compression: 0.5,
            },
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), FourierError> {
        let ratio = self.image.compression;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(FourierError::InvalidRatio { ratio });
        }
        if self.image.image_size == 0 {
            return Err(FourierError::EmptySamples);
        }
        Ok(())
    }
}
