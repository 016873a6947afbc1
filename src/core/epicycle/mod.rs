//! # 에피사이클 누적기
//!
//! 순서 있는 회전 벡터 열을 누적해 재구성 점을 만든다.
//! 연속 궤적을 위한 상태(마지막 점, 궤적)는 `EpicycleTracer` 가 호출자 소유로 따로 가진다.

pub mod accumulator;
pub mod tracer;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use accumulator::{accumulate, reconstruct, EpicycleFrame};
pub use tracer::{EpicycleTracer, TraceSegment};
