use super::random_image;
use crate::core::error::FourierError;
use crate::core::image::{dct_forward, zigzag_order, FrequencyData};
use std::collections::HashSet;

fn sequential_grid(n: usize) -> FrequencyData {
    FrequencyData::new(n, n, (1..=n * n).map(|v| v as f32).collect()).unwrap()
}

#[test]
fn 지그재그_순서_3x3() {
    assert_eq!(
        zigzag_order(3),
        vec![(0, 0), (0, 1), (1, 0), (2, 0), (1, 1), (0, 2), (1, 2), (2, 1), (2, 2)]
    );
    assert!(zigzag_order(0).is_empty());
    assert_eq!(zigzag_order(1), vec![(0, 0)]);
}

#[test]
fn 지그재그는_모든_칸을_한_번씩_방문() {
    for n in 1..=12 {
        let order = zigzag_order(n);
        assert_eq!(order.len(), n * n);
        let unique: HashSet<(usize, usize)> = order.iter().copied().collect();
        assert_eq!(unique.len(), n * n);
        // 대각선 인덱스는 감소하지 않는다
        assert!(order.windows(2).all(|w| w[0].0 + w[0].1 <= w[1].0 + w[1].1));
    }
}

#[test]
fn drop_last_0_은_항등_n제곱은_전부_0() {
    let grid = dct_forward(&random_image(8, 8, 4));
    assert_eq!(grid.drop_last(0).unwrap(), grid);
    assert_eq!(grid.drop_first(0).unwrap(), grid);

    let zeroed = grid.drop_last(64).unwrap();
    assert!(zeroed.data().iter().all(|&v| v == 0.0));
    assert_eq!(grid.drop_first(64).unwrap(), zeroed);
}

#[test]
fn drop_last_는_오른쪽_아래부터_지운다() {
    let grid = sequential_grid(3);
    let dropped = grid.drop_last(3).unwrap();
    // 역순 지그재그: (2,2), (2,1), (1,2)
    assert_eq!(dropped.get(2, 2), Some(0.0));
    assert_eq!(dropped.get(2, 1), Some(0.0));
    assert_eq!(dropped.get(1, 2), Some(0.0));
    assert_eq!(dropped.nonzero_count(), 6);
    assert_eq!(dropped.get(0, 2), Some(3.0));
}

#[test]
fn drop_first_는_직류부터_지운다() {
    let grid = sequential_grid(3);
    let dropped = grid.drop_first(4).unwrap();
    assert_eq!(dropped.get(0, 0), Some(0.0));
    assert_eq!(dropped.get(0, 1), Some(0.0));
    assert_eq!(dropped.get(1, 0), Some(0.0));
    assert_eq!(dropped.get(2, 0), Some(0.0));
    assert_eq!(dropped.get(1, 1), Some(5.0));
    assert_eq!(dropped.nonzero_count(), 5);
}

#[test]
fn drop_last_는_앞쪽_k_칸의_거울상과_같다() {
    let n = 7;
    let grid = sequential_grid(n);
    for k in 0..=n * n {
        let dropped = grid.drop_last(k).unwrap();
        let mut mirrored = grid.data().clone();
        for &(row, col) in zigzag_order(n).iter().take(k) {
            mirrored[[n - row - 1, n - col - 1]] = 0.0;
        }
        assert_eq!(dropped.data(), &mirrored, "k={}", k);
    }
}

#[test]
fn 압축_비율은_내림한_개수를_버린다() {
    let grid = sequential_grid(4);
    // floor(16 · 0.3) = 4
    assert_eq!(grid.compress(0.3).unwrap(), grid.drop_last(4).unwrap());
    assert_eq!(grid.compress(0.0).unwrap(), grid);
    assert_eq!(grid.compress(1.0).unwrap().nonzero_count(), 0);

    assert_eq!(grid.compress(-0.1).unwrap_err(), FourierError::InvalidRatio { ratio: -0.1 });
    assert!(grid.compress(f32::NAN).is_err());
}

#[test]
fn 압축_개수는_단정밀도_곱으로_정한다() {
    let grid = FrequencyData::new(10, 10, vec![1.0; 100]).unwrap();
    // 100 · 0.29f32 = 29 (f64 로 넓히면 28.999...)
    assert_eq!(grid.compress(0.29).unwrap().nonzero_count(), 100 - 29);
    assert_eq!(grid.compress(0.29).unwrap(), grid.drop_last(29).unwrap());
    assert_eq!(grid.compress(0.5).unwrap().nonzero_count(), 50);
}

#[test]
fn 계약_위반은_invalid_argument() {
    let rectangular = FrequencyData::new(4, 2, vec![1.0; 8]).unwrap();
    let err = rectangular.drop_last(1).unwrap_err();
    assert_eq!(err, FourierError::NonSquareGrid { width: 4, height: 2 });
    assert!(err.is_invalid_argument());
    assert!(rectangular.drop_first(0).is_err());

    let square = sequential_grid(3);
    assert_eq!(
        square.drop_last(10).unwrap_err(),
        FourierError::DropCountOutOfRange { count: 10, capacity: 9 }
    );
    assert!(square.drop_first(10).is_err());

    assert!(FrequencyData::new(3, 3, vec![0.0; 8]).is_err());
    assert!(FrequencyData::new(0, 0, vec![]).is_err());
}

#[test]
fn 역직렬화도_격자_검증을_거친다() {
    let grid = sequential_grid(3);
    let json = serde_json::to_string(&grid).unwrap();
    let restored: FrequencyData = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, grid);

    let empty = r#"{"v":1,"dim":[0,0],"data":[]}"#;
    assert!(serde_json::from_str::<FrequencyData>(empty).is_err());
}
