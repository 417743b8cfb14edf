//! 스크린 캡처.
//!
//! xcap 기반 멀티모니터 캡처. 모든 디스플레이를 열거 순서대로 캡처한다.

use autopause_core::error::CoreError;
use autopause_core::models::frame::DisplayFrame;
use autopause_core::ports::capture::ScreenCapturer;
use tracing::debug;
use xcap::Monitor;

/// 스크린 캡처: xcap 기반
pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    /// 새 캡처 인스턴스 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for XcapScreenCapturer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_all(&self) -> Result<Vec<DisplayFrame>, CoreError> {
        let monitors = Monitor::all()
            .map_err(|e| CoreError::Capture(format!("모니터 목록 조회 실패: {e}")))?;

        if monitors.is_empty() {
            return Err(CoreError::Capture("모니터를 찾을 수 없음".to_string()));
        }

        monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| {
                let origin_x = monitor
                    .x()
                    .map_err(|e| CoreError::Capture(format!("모니터 {index} 위치 조회 실패: {e}")))?;
                let origin_y = monitor
                    .y()
                    .map_err(|e| CoreError::Capture(format!("모니터 {index} 위치 조회 실패: {e}")))?;

                let image = monitor
                    .capture_image()
                    .map_err(|e| CoreError::Capture(format!("모니터 {index} 캡처 실패: {e}")))?;

                debug!(
                    display = index,
                    origin_x,
                    origin_y,
                    "스크린 캡처 완료: {}x{}",
                    image.width(),
                    image.height()
                );

                Ok(DisplayFrame::new(index, origin_x, origin_y, image))
            })
            .collect()
    }
}
