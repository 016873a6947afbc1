use crate::core::series::ClosedPolyline;
use approx::assert_abs_diff_eq;

fn unit_square(side: f64) -> ClosedPolyline {
    ClosedPolyline::new(vec![(0.0, 0.0), (side, 0.0), (side, side), (0.0, side)]).unwrap()
}

#[test]
fn 길이는_닫는_선분을_포함한다() {
    assert_abs_diff_eq!(unit_square(3.0).length(), 12.0, epsilon = 1e-12);
}

#[test]
fn 호_길이_위치_보간() {
    let square = unit_square(2.0);
    let p = square.point_at_length(3.0).unwrap();
    assert_abs_diff_eq!(p.re, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.im, 1.0, epsilon = 1e-12);

    let closing = square.point_at_length(7.5).unwrap();
    assert_abs_diff_eq!(closing.re, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(closing.im, 0.5, epsilon = 1e-12);

    assert!(square.point_at_length(-0.1).is_none());
    assert!(square.point_at_length(8.1).is_none());
}

#[test]
fn 단위_간격_샘플은_point_at_length_와_같다() {
    let square = unit_square(2.5);
    let samples = square.unit_arc_samples();
    assert_eq!(samples.len(), 10);
    for (i, sample) in samples.iter().enumerate() {
        let expected = square.point_at_length(i as f64).unwrap();
        assert_abs_diff_eq!(sample.re, expected.re, epsilon = 1e-9);
        assert_abs_diff_eq!(sample.im, expected.im, epsilon = 1e-9);
    }
}

#[test]
fn 빈_꺾은선과_점_하나() {
    assert!(ClosedPolyline::new(vec![]).is_err());
    let point = ClosedPolyline::new(vec![(1.0, 1.0)]).unwrap();
    assert_eq!(point.length(), 0.0);
    assert!(point.unit_arc_samples().is_empty());
}
