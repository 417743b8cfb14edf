//! 64비트 perceptual hash.
//!
//! 64x64 축소 → 그레이스케일 → 2D DCT-II → 좌상단 8x8 저주파 계수 → 중앙값 기준 비트화.
//! 해상도와 약한 압축 손실에 둔감하므로 픽셀 단위 일치가 필요 없다.

use autopause_core::error::CoreError;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use once_cell::sync::Lazy;

/// DCT 입력 한 변 크기
const INPUT_SIZE: usize = 64;

/// 사용하는 저주파 계수 한 변 크기
const LOW_FREQ: usize = 8;

/// 지문 비트 수
pub const FINGERPRINT_BITS: u32 = 64;

/// 저주파 DCT 계수용 코사인 테이블 `[k * INPUT_SIZE + n]`
static COSINES: Lazy<Vec<f64>> = Lazy::new(|| {
    let n_total = INPUT_SIZE as f64;
    let mut table = Vec::with_capacity(LOW_FREQ * INPUT_SIZE);
    for k in 0..LOW_FREQ {
        for n in 0..INPUT_SIZE {
            let angle = std::f64::consts::PI / n_total * (n as f64 + 0.5) * k as f64;
            table.push(angle.cos());
        }
    }
    table
});

/// 이미지의 perceptual 지문
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    #[cfg(test)]
    pub(crate) fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// 이미지 지문 계산. 면적이 0이면 실패.
    pub fn of(image: &RgbaImage) -> Result<Self, CoreError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CoreError::Fingerprint(format!(
                "빈 이미지: {width}x{height}"
            )));
        }

        let resized = imageops::resize(
            image,
            INPUT_SIZE as u32,
            INPUT_SIZE as u32,
            FilterType::Triangle,
        );

        let gray: Vec<f64> = resized
            .pixels()
            .map(|p| 0.299 * p[0] as f64 + 0.587 * p[1] as f64 + 0.114 * p[2] as f64)
            .collect();

        let coefficients = low_frequency_dct(&gray);

        let mut sorted = coefficients;
        sorted.sort_by(f64::total_cmp);
        let median = sorted[sorted.len() / 2];

        let bits = coefficients
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > median)
            .fold(0u64, |acc, (i, _)| acc | 1u64 << (coefficients.len() - 1 - i));

        Ok(Self(bits))
    }

    /// 해밍 거리
    pub fn distance(&self, other: &Fingerprint) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

/// 64x64 행렬의 2D DCT-II 중 좌상단 8x8 계수 (행 우선)
///
/// 행 방향 변환을 저주파 8개만 계산한 뒤 그 8개 열에 대해서만 열 방향 변환을 한다.
fn low_frequency_dct(pixels: &[f64]) -> [f64; LOW_FREQ * LOW_FREQ] {
    let cos = &*COSINES;

    // rows[y][u] = sum_x pixels[y][x] * cos(u, x)
    let mut rows = [[0.0f64; LOW_FREQ]; INPUT_SIZE];
    for (y, row) in rows.iter_mut().enumerate() {
        let line = &pixels[y * INPUT_SIZE..(y + 1) * INPUT_SIZE];
        for (u, out) in row.iter_mut().enumerate() {
            let basis = &cos[u * INPUT_SIZE..(u + 1) * INPUT_SIZE];
            *out = line.iter().zip(basis).map(|(p, c)| p * c).sum();
        }
    }

    let mut out = [0.0f64; LOW_FREQ * LOW_FREQ];
    for v in 0..LOW_FREQ {
        let basis = &cos[v * INPUT_SIZE..(v + 1) * INPUT_SIZE];
        for u in 0..LOW_FREQ {
            out[v * LOW_FREQ + u] = rows
                .iter()
                .zip(basis)
                .map(|(row, c)| row[u] * c)
                .sum();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 8x8 블록마다 의사 난수 밝기를 가진 이미지
    fn blocks(size: u32, seed: u32) -> RgbaImage {
        let block = (size / 8).max(1);
        RgbaImage::from_fn(size, size, |x, y| {
            let (bx, by) = (x / block, y / block);
            let v = (((bx * (7 + seed) + by * (13 + 2 * seed)) * 37 + seed * 11) % 251) as u8;
            Rgba([v, v.wrapping_mul(3), 255 - v, 255])
        })
    }

    #[test]
    fn deterministic() {
        let img = blocks(120, 1);
        assert_eq!(Fingerprint::of(&img).unwrap(), Fingerprint::of(&img).unwrap());
    }

    #[test]
    fn zero_area_fails() {
        let img = RgbaImage::new(0, 10);
        assert!(matches!(
            Fingerprint::of(&img),
            Err(CoreError::Fingerprint(_))
        ));
    }

    #[test]
    fn resolution_invariant() {
        let a = Fingerprint::of(&blocks(64, 2)).unwrap();
        let b = Fingerprint::of(&blocks(256, 2)).unwrap();
        assert!(a.distance(&b) <= 10, "distance {}", a.distance(&b));
    }

    #[test]
    fn distinct_patterns_differ() {
        let a = Fingerprint::of(&blocks(64, 1)).unwrap();
        let b = Fingerprint::of(&blocks(64, 5)).unwrap();
        assert!(a.distance(&b) > 8, "distance {}", a.distance(&b));
    }

    #[test]
    fn distance_is_popcount_of_xor() {
        let a = Fingerprint::from_bits(0b1011);
        let b = Fingerprint::from_bits(0b0110);
        assert_eq!(a.distance(&b), 3);
        assert_eq!(a.distance(&a), 0);
    }
}
