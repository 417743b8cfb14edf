//! 지문 기반 유사도 점수.
//!
//! `1 - 해밍거리 / 64`. 동일하면 1.0, 완전히 다르면 0에 가깝다.

use autopause_core::models::landmark::FAILED_SCORE;
use image::RgbaImage;
use tracing::debug;

use crate::phash::{Fingerprint, FINGERPRINT_BITS};

/// 두 지문의 유사도 (0.0 ~ 1.0)
pub fn score(a: &Fingerprint, b: &Fingerprint) -> f64 {
    1.0 - a.distance(b) as f64 / FINGERPRINT_BITS as f64
}

/// 두 이미지의 유사도. 어느 한쪽이라도 지문 계산에 실패하면 `FAILED_SCORE`.
pub fn similarity(a: &RgbaImage, b: &RgbaImage) -> f64 {
    match (Fingerprint::of(a), Fingerprint::of(b)) {
        (Ok(fa), Ok(fb)) => score(&fa, &fb),
        (Err(e), _) | (_, Err(e)) => {
            debug!("유사도 계산 실패: {e}");
            FAILED_SCORE
        }
    }
}
