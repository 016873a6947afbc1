//! 호출자가 소유하는 궤적 상태

use super::accumulator::{accumulate, EpicycleFrame};
use crate::core::config::TracerOptions;
use crate::core::math::{complex_from_point, ComplexExt, ComplexNumber, I};
use crate::core::series::FourierSeries;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 펜 궤적 한 조각. `from == to` 이면 점 하나
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSegment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl TraceSegment {
    pub fn is_dot(&self) -> bool {
        self.from == self.to
    }

    fn shifted_up(self) -> Self {
        Self {
            from: (self.from.0, self.from.1 + 1.0),
            to: (self.to.0, self.to.1 + 1.0),
        }
    }
}

/// 프레임마다 재구성 점을 이어 궤적을 만든다.
///
/// 상태는 마지막 점과 궤적뿐이며 `reset()` 으로 모두 지운다.
#[derive(Debug, Clone)]
pub struct EpicycleTracer {
    options: TracerOptions,
    trace: VecDeque<TraceSegment>,
    last_point: Option<ComplexNumber>,
}

impl EpicycleTracer {
    pub fn new(options: TracerOptions) -> Self {
        Self {
            options,
            trace: VecDeque::new(),
            last_point: None,
        }
    }

    pub fn options(&self) -> &TracerOptions {
        &self.options
    }

    /// 샘플 좌표계의 누적 시작점 (`pen_origin`)
    pub fn origin(&self) -> ComplexNumber {
        let (x, y) = self.options.pen_origin;
        complex_from_point(x, y)
    }

    /// 한 프레임 진행: 누적 → 궤적 기록
    pub fn draw<S>(&mut self, series: &S, time: f64, frequency_limit: usize) -> EpicycleFrame
    where
        S: FourierSeries + ?Sized,
    {
        let frame = accumulate(series.enumerate(time, frequency_limit), self.origin(), frequency_limit);
        self.record(frame.position);
        frame
    }

    fn record(&mut self, position: ComplexNumber) {
        if self.options.rolls_paper {
            // 종이를 한 칸 말아 올림
            for segment in self.trace.iter_mut() {
                *segment = segment.shifted_up();
            }
        }

        let to = position.to_point();
        let from = self.last_point.map(|last| last.to_point()).unwrap_or(to);
        self.trace.push_back(TraceSegment { from, to });

        self.last_point = Some(if self.options.rolls_paper { position + I } else { position });

        if let Some(max_segments) = self.options.max_segments {
            while self.trace.len() > max_segments {
                self.trace.pop_front();
            }
        }
    }

    pub fn last_point(&self) -> Option<ComplexNumber> {
        self.last_point
    }

    pub fn trace(&self) -> &VecDeque<TraceSegment> {
        &self.trace
    }

    /// 궤적과 마지막 점을 지운다. 다음 프레임은 점 하나로 시작한다.
    pub fn reset(&mut self) {
        self.trace.clear();
        self.last_point = None;
        log::trace!("epicycle tracer reset");
    }
}
