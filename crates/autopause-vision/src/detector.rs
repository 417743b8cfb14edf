//! 상태 감지기.
//!
//! 창 탐색 → 전체 디스플레이 캡처 → 프레임 분류를 한 주기 단위로 묶는다.
//! 창이 없으면 캡처 없이 `OutOfGame`, 캡처에 실패하면 `Error`로 분류한다.

use std::sync::Arc;

use autopause_core::error::CoreError;
use autopause_core::models::frame::DisplayFrame;
use autopause_core::models::geometry::WindowBounds;
use autopause_core::models::state::DetectionResult;
use autopause_core::ports::capture::ScreenCapturer;
use autopause_core::ports::window::WindowLocator;
use tracing::{debug, warn};

use crate::classifier::FrameClassifier;

/// 한 주기의 감지 결과
#[derive(Debug)]
pub struct CycleDetection {
    /// 분류 결과
    pub result: DetectionResult,
    /// 창 클라이언트 영역 (창을 찾은 경우)
    pub bounds: Option<WindowBounds>,
    /// 이번 주기에 캡처한 프레임 (디버그 덤프용)
    pub frames: Vec<DisplayFrame>,
    /// 캡처 실패 원인
    pub capture_error: Option<CoreError>,
}

/// 상태 감지기
pub struct StateDetector {
    locator: Arc<dyn WindowLocator>,
    capturer: Arc<dyn ScreenCapturer>,
    classifier: FrameClassifier,
}

impl StateDetector {
    pub fn new(
        locator: Arc<dyn WindowLocator>,
        capturer: Arc<dyn ScreenCapturer>,
        classifier: FrameClassifier,
    ) -> Self {
        Self {
            locator,
            capturer,
            classifier,
        }
    }

    pub fn classifier(&self) -> &FrameClassifier {
        &self.classifier
    }

    /// 한 주기 감지
    pub fn detect(&self) -> CycleDetection {
        let window = match self.locator.locate() {
            Ok(Some(window)) => window,
            Ok(None) => {
                debug!("대상 창 없음");
                return CycleDetection::out_of_game();
            }
            Err(e) => {
                debug!("창 조회 실패, 창 없음으로 처리: {e}");
                return CycleDetection::out_of_game();
            }
        };

        let bounds = window.bounds;
        debug!(title = %window.title, ?bounds, "대상 창 발견");

        let frames = match self.capturer.capture_all() {
            Ok(frames) => frames,
            Err(e) => {
                warn!("스크린 캡처 실패: {e}");
                return CycleDetection {
                    result: DetectionResult::error(self.classifier.click_target(&bounds)),
                    bounds: Some(bounds),
                    frames: Vec::new(),
                    capture_error: Some(e),
                };
            }
        };

        let result = self.classifier.classify(&frames, &bounds);

        CycleDetection {
            result,
            bounds: Some(bounds),
            frames,
            capture_error: None,
        }
    }
}

impl CycleDetection {
    fn out_of_game() -> Self {
        Self {
            result: DetectionResult::out_of_game(),
            bounds: None,
            frames: Vec::new(),
            capture_error: None,
        }
    }
}
