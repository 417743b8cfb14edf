//! 스크린 캡처 포트.
//!
//! 구현: `autopause-vision::capture::XcapScreenCapturer`

use crate::error::CoreError;
use crate::models::frame::DisplayFrame;

/// 전체 디스플레이 캡처기
pub trait ScreenCapturer: Send + Sync {
    /// 연결된 모든 디스플레이를 캡처 순서대로 한 장씩 반환
    fn capture_all(&self) -> Result<Vec<DisplayFrame>, CoreError>;
}
