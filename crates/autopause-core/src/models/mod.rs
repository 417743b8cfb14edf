//! AutoPause 도메인 모델.
//!
//! 한 폴링 주기 안에서 흐르는 데이터: 창 영역 → 랜드마크 영역 → 점수 → 상태.

pub mod frame;
pub mod geometry;
pub mod landmark;
pub mod state;
