//! 분리형 2D DCT (행 → 열 순방향, 열 → 행 역방향)
//!
//! rustdct 의 DCT-II 는 비정규화, DCT-III 는 그 역변환의 n/2 배이므로
//! 역방향 각 패스 뒤에 `1 / (n/2)` 를 곱한다.

use super::{FrequencyData, GrayscaleImage};
use crate::core::error::Result;
use ndarray::{Array, Array2, Axis};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustdct::{DctPlanner, TransformType2And3};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// 픽셀 중심 이동 값
const BIAS: f32 = 128.0;

// 길이별 DCT 플랜 캐시 (thread-safe)
static DCT_PLAN_CACHE: Lazy<RwLock<HashMap<usize, Arc<dyn TransformType2And3<f32>>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn plan(len: usize) -> Arc<dyn TransformType2And3<f32>> {
    if let Some(cached) = DCT_PLAN_CACHE.read().get(&len) {
        return Arc::clone(cached);
    }
    let planned = DctPlanner::new().plan_dct2(len);
    Arc::clone(DCT_PLAN_CACHE.write().entry(len).or_insert(planned))
}

/// 이미지 DCT 코덱
pub struct ImageDct;

impl ImageDct {
    /// -128 이동 → 행별 DCT-II → 열별 DCT-II
    pub fn forward(image: &GrayscaleImage) -> FrequencyData {
        let start = Instant::now();
        let (width, height) = (image.width(), image.height());
        let mut data: Array2<f32> = image.to_array().mapv(|p| p as f32 - BIAS);

        let dct_row = plan(width);
        let dct_col = plan(height);

        // --- 행별 DCT 병렬 처리 ---
        data.axis_iter_mut(Axis(0)).into_par_iter().for_each(|mut row| {
            let mut row_vec = row.to_vec();
            dct_row.process_dct2(&mut row_vec);
            row.assign(&Array::from(row_vec));
        });

        // --- 열별 DCT 병렬 처리 ---
        data.axis_iter_mut(Axis(1)).into_par_iter().for_each(|mut col| {
            let mut col_vec = col.to_vec();
            dct_col.process_dct2(&mut col_vec);
            col.assign(&Array::from(col_vec));
        });

        log::debug!("image dct forward {}x{} elapsed={:?}", width, height, start.elapsed());
        FrequencyData::from_transform(data)
    }

    /// 역방향 후 반올림, [0, 255] 고정
    pub fn inverse(frequency_data: &FrequencyData) -> GrayscaleImage {
        let start = Instant::now();
        let (width, height) = (frequency_data.width(), frequency_data.height());

        let bitmap: Vec<u8> = Self::inverse_unquantized(frequency_data)
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect();

        log::debug!("image dct inverse {}x{} elapsed={:?}", width, height, start.elapsed());
        GrayscaleImage::from_parts(width, height, bitmap)
    }

    /// 열별 DCT-III·스케일 → 행별 DCT-III·스케일 → +128 (양자화 전 실수 픽셀)
    ///
    /// 잘라낸 계수가 늘수록 이 값과 원본 사이의 오차는 줄지 않는다.
    /// 8비트 양자화 이후의 오차는 대체로만 단조롭다.
    pub fn inverse_unquantized(frequency_data: &FrequencyData) -> Array2<f32> {
        let (width, height) = (frequency_data.width(), frequency_data.height());
        let mut data = frequency_data.data().clone();

        let dct_col = plan(height);
        let column_scale = 1.0 / (height as f32 / 2.0);
        data.axis_iter_mut(Axis(1)).into_par_iter().for_each(|mut col| {
            let mut col_vec = col.to_vec();
            dct_col.process_dct3(&mut col_vec);
            col.assign(&Array::from(col_vec).mapv(|v| v * column_scale));
        });

        let dct_row = plan(width);
        let row_scale = 1.0 / (width as f32 / 2.0);
        data.axis_iter_mut(Axis(0)).into_par_iter().for_each(|mut row| {
            let mut row_vec = row.to_vec();
            dct_row.process_dct3(&mut row_vec);
            row.assign(&Array::from(row_vec).mapv(|v| v * row_scale));
        });

        data.mapv_inplace(|v| v + BIAS);
        data
    }

    /// 순방향 → 비율만큼 고주파 절단 → 역방향
    pub fn reconstruct(image: &GrayscaleImage, compression: f32) -> Result<GrayscaleImage> {
        let compressed = Self::forward(image).compress(compression)?;
        log::trace!(
            "reconstruct: kept {} of {} coefficients",
            compressed.nonzero_count(),
            image.width() * image.height()
        );
        Ok(Self::inverse(&compressed))
    }
}
