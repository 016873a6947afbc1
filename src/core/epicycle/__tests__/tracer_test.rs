use crate::core::config::TracerOptions;
use crate::core::epicycle::EpicycleTracer;
use crate::core::math::ComplexNumber;
use crate::core::series::signals::{circle_points, demo_signal};
use crate::core::series::{ClosedPathSeries, FourierSeries, PeriodicSeries};
use approx::assert_abs_diff_eq;

#[test]
fn 첫_프레임은_점_이후는_선분() {
    let series = ClosedPathSeries::new(&circle_points(32, 1.0), 2).unwrap();
    let mut tracer = EpicycleTracer::new(TracerOptions::closed_path());

    let first = tracer.draw(&series, 0.0, 2);
    assert_eq!(tracer.trace().len(), 1);
    assert!(tracer.trace()[0].is_dot());
    assert_eq!(tracer.last_point(), Some(first.position));

    let second = tracer.draw(&series, 0.1, 2);
    assert_eq!(tracer.trace().len(), 2);
    let segment = tracer.trace()[1];
    assert!(!segment.is_dot());
    assert_eq!(segment.from, (first.position.re, first.position.im));
    assert_eq!(segment.to, (second.position.re, second.position.im));
}

#[test]
fn 리셋은_궤적과_마지막_점을_지운다() {
    let series = ClosedPathSeries::new(&circle_points(32, 1.0), 2).unwrap();
    let mut tracer = EpicycleTracer::new(TracerOptions::closed_path());
    for step in 0..5 {
        tracer.draw(&series, step as f64 * 0.01, 2);
    }
    assert_eq!(tracer.trace().len(), 5);

    tracer.reset();
    assert!(tracer.trace().is_empty());
    assert!(tracer.last_point().is_none());

    tracer.draw(&series, 0.5, 2);
    assert!(tracer.trace()[0].is_dot());
}

#[test]
fn 종이_말기는_궤적을_위로_민다() {
    let series = PeriodicSeries::new(&demo_signal(64, 60.0)).unwrap();
    let mut tracer = EpicycleTracer::new(TracerOptions::periodic());

    let first = tracer.draw(&series, 0.0, 64);
    assert_eq!(tracer.trace()[0].to, (first.position.re, first.position.im));
    let last = tracer.last_point().unwrap();
    assert_abs_diff_eq!(last.im, first.position.im + 1.0, epsilon = 1e-12);

    let second = tracer.draw(&series, 1.0 / 64.0, 64);
    // 이전 점은 한 칸 올라가고, 새 선분은 올라간 점에서 시작
    let dot = tracer.trace()[0];
    assert_abs_diff_eq!(dot.to.1, first.position.im + 1.0, epsilon = 1e-12);
    let segment = tracer.trace()[1];
    assert_abs_diff_eq!(segment.from.1, first.position.im + 1.0, epsilon = 1e-12);
    assert_eq!(segment.to, (second.position.re, second.position.im));

    // 펜 원점 (0, 128) 에서 누적
    assert_eq!(tracer.origin(), ComplexNumber::new(0.0, 128.0));
}

#[test]
fn 최대_조각_수를_넘으면_오래된_것부터_버린다() {
    let series = ClosedPathSeries::new(&circle_points(16, 1.0), 1).unwrap();
    let options = TracerOptions {
        max_segments: Some(3),
        ..TracerOptions::closed_path()
    };
    let mut tracer = EpicycleTracer::new(options);
    for step in 0..10 {
        tracer.draw(&series, step as f64 * 0.05, 1);
    }
    assert_eq!(tracer.trace().len(), 3);
    assert!(tracer.trace().iter().all(|segment| !segment.is_dot()));
}

#[test]
fn 펜_원점은_샘플_좌표계_기준이다() {
    let series = ClosedPathSeries::new(&circle_points(64, 1.0), 3).unwrap();
    let bounds = series.bounds();
    assert_ne!(bounds.origin(), (0.0, 0.0));

    let options = TracerOptions {
        pen_origin: (5.0, -2.0),
        ..TracerOptions::closed_path()
    };
    let mut tracer = EpicycleTracer::new(options);
    let frame = tracer.draw(&series, 0.0, 1);

    // 표시 영역 원점은 누적에 끼어들지 않는다
    assert_eq!(frame.origin, ComplexNumber::new(5.0, -2.0));
    assert_abs_diff_eq!(frame.position.re, 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.position.im, -2.0, epsilon = 1e-9);

    // 화면 좌표는 그리기 쪽에서 옮긴다
    let (x, y) = bounds.to_view(frame.position);
    assert_abs_diff_eq!(x, 6.0 - bounds.x, epsilon = 1e-9);
    assert_abs_diff_eq!(y, -2.0 - bounds.y, epsilon = 1e-9);
}
