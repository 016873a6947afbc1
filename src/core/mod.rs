//! # 푸리에 변환 핵심 모듈
//!
//! 신호/경로 → 급수 모델 → 회전 벡터 → 에피사이클 누적,
//! 이미지 → DCT 주파수 격자 → 절단 → 역 DCT 로 이어지는 단방향 구성 요소들

pub mod config;
pub mod epicycle;
pub mod error;
pub mod image;
pub mod math;
pub mod series;
pub mod transform;


// 주요 타입들 재수출
pub use config::{FourierConfig, ImageDctConfig, TracerOptions};
pub use epicycle::{accumulate, reconstruct, EpicycleFrame, EpicycleTracer, TraceSegment};
pub use error::{FourierError, Result};
pub use image::{dct_forward, dct_inverse, FrequencyData, GrayscaleImage, ImageDct};
pub use math::{expi, ComplexExt, ComplexNumber};
pub use series::{
    build_1d_series, build_2d_series, Bounds, ClosedPathSeries, ClosedPolyline, FourierSeries,
    FrequencyComponent, PeriodicSeries, Series,
};
pub use transform::{
    dft_forward, dft_inverse, fft_forward, fft_inverse, planned_forward, planned_forward_real,
    TransformEngine,
};
