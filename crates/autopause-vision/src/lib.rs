//! # autopause-vision
//!
//! 상태 감지 엔진 크레이트.
//! 스크린 캡처, perceptual hash 지문, 템플릿 유사도, 디스플레이 선택과 상태 결정까지
//! 한 주기의 감지 파이프라인을 담당한다.

pub mod capture;
pub mod classifier;
pub mod detector;
pub mod dump;
pub mod phash;
pub mod similarity;
pub mod templates;
