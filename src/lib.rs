//! 푸리에 분해/재구성 엔진과 이미지 DCT 코덱
//!
//! 이산 신호나 닫힌 경로를 회전 벡터(에피사이클) 집합으로 분해해 임의 시각에서 재구성하고,
//! 정사각형 그레이스케일 이미지를 주파수 격자로 변환해 지그재그 순서로 손실 압축한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 변환 엔진
    dft_forward, dft_inverse, fft_forward, fft_inverse, planned_forward, planned_forward_real,
    TransformEngine,
    // 급수 모델
    build_1d_series, build_2d_series, Bounds, ClosedPathSeries, ClosedPolyline, FourierSeries,
    FrequencyComponent, PeriodicSeries, Series,
    // 에피사이클
    accumulate, reconstruct, EpicycleFrame, EpicycleTracer, TraceSegment,
    // 이미지 DCT
    dct_forward, dct_inverse, FrequencyData, GrayscaleImage, ImageDct,
    // 공통
    expi, ComplexExt, ComplexNumber, FourierConfig, FourierError, ImageDctConfig, TracerOptions,
};

// 편의 타입 별칭들
pub type Complex64 = ComplexNumber;
