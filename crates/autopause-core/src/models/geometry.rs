//! 영역 기하 모델.
//!
//! 창 너비 기준 비율로 정의된 랜드마크 영역을 절대 픽셀 사각형으로 변환한다.
//! 세로 방향도 창 *너비* 기준으로 계산하므로 레터박스가 생겨도 영역 비율이 유지된다.

use serde::{Deserialize, Serialize};

/// 대상 창 클라이언트 영역 (절대 화면 좌표)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// 절대 픽셀 사각형 (right/bottom 미포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// 원점 이동 (디스플레이 로컬 좌표 변환용)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// `(0, 0, width, height)` 범위로 자르기. 겹치지 않으면 `None`.
    pub fn clip(&self, width: u32, height: u32) -> Option<Self> {
        let clipped = Self {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(width as i32),
            bottom: self.bottom.min(height as i32),
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// 정규화된 랜드마크 영역 서술자
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    /// 왼쪽 여백 (창 너비 대비)
    pub left_ratio: f64,
    /// 오른쪽 여백 (창 너비 대비)
    pub right_ratio: f64,
    /// 위/아래 가장자리로부터의 여백 (창 너비 대비)
    pub vertical_ratio: f64,
    /// 영역 가로/세로 비
    pub aspect_ratio: f64,
    /// true면 위쪽 가장자리 기준, false면 아래쪽 기준
    pub from_top: bool,
}

impl RegionDescriptor {
    pub const fn new(
        left_ratio: f64,
        right_ratio: f64,
        vertical_ratio: f64,
        aspect_ratio: f64,
        from_top: bool,
    ) -> Self {
        Self {
            left_ratio,
            right_ratio,
            vertical_ratio,
            aspect_ratio,
            from_top,
        }
    }

    /// 창 영역에 대한 절대 픽셀 사각형.
    ///
    /// 모든 가장자리는 반올림 없이 0 방향으로 잘라낸다.
    pub fn rect(&self, window: &WindowBounds) -> PixelRect {
        let left = window.left as f64;
        let top = window.top as f64;
        let right = window.right as f64;
        let bottom = window.bottom as f64;
        let width = right - left;

        let x1 = left + width * self.left_ratio;
        let x2 = right - width * self.right_ratio;
        let span = (x2 - x1) / self.aspect_ratio;

        let (y1, y2) = if self.from_top {
            let y1 = top + width * self.vertical_ratio;
            (y1, y1 + span)
        } else {
            let y2 = bottom - width * self.vertical_ratio;
            (y2 - span, y2)
        };

        PixelRect {
            left: x1 as i32,
            top: y1 as i32,
            right: x2 as i32,
            bottom: y2 as i32,
        }
    }

    /// 잘라낸 사각형의 중심점 (클릭 좌표)
    pub fn center(&self, window: &WindowBounds) -> (f64, f64) {
        let rect = self.rect(window);
        (
            (rect.left + rect.right) as f64 / 2.0,
            (rect.top + rect.bottom) as f64 / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAUSE: RegionDescriptor = RegionDescriptor::new(0.933, 0.034, 0.05, 1.6, false);
    const SETTINGS: RegionDescriptor = RegionDescriptor::new(0.025, 0.945, 0.025, 1.0, true);

    #[test]
    fn pause_region_full_hd() {
        let window = WindowBounds::new(0, 0, 1920, 1080);
        let rect = PAUSE.rect(&window);
        // 1920 * 0.933 = 1791.36, 1920 - 65.28 = 1854.72 → 잘라냄
        assert_eq!(rect.left, 1791);
        assert_eq!(rect.right, 1854);
        assert_eq!(rect.bottom, 984);
        assert_eq!(rect.top, 944);
    }

    #[test]
    fn from_top_edge_is_width_relative() {
        let windows = [
            WindowBounds::new(0, 0, 1920, 1080),
            WindowBounds::new(100, 50, 1380, 770),
            WindowBounds::new(-1920, 200, 0, 1280),
            WindowBounds::new(7, 13, 1607, 2013),
        ];
        for window in windows {
            let rect = SETTINGS.rect(&window);
            let expected = (window.top as f64 + window.width() as f64 * 0.025) as i32;
            assert_eq!(rect.top, expected, "{window:?}");
        }
    }

    #[test]
    fn height_independent_of_window_height() {
        let short = PAUSE.rect(&WindowBounds::new(0, 0, 1920, 900));
        let tall = PAUSE.rect(&WindowBounds::new(0, 0, 1920, 1200));
        assert_eq!(short.width(), tall.width());
        assert_eq!(short.height(), tall.height());
        assert_eq!(tall.bottom - short.bottom, 300);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 1000 * 0.0019 = 1.9 → 1
        let region = RegionDescriptor::new(0.0019, 0.0, 0.0, 1.0, true);
        let rect = region.rect(&WindowBounds::new(0, 0, 1000, 1000));
        assert_eq!(rect.left, 1);
    }

    #[test]
    fn center_of_pause_region() {
        let window = WindowBounds::new(0, 0, 1920, 1080);
        let (x, y) = PAUSE.center(&window);
        assert_eq!(x, 1822.5);
        assert_eq!(y, 964.0);
    }

    #[test]
    fn clip_to_display() {
        let rect = PixelRect {
            left: -10,
            top: 5,
            right: 30,
            bottom: 500,
        };
        let clipped = rect.clip(20, 100).unwrap();
        assert_eq!(
            clipped,
            PixelRect {
                left: 0,
                top: 5,
                right: 20,
                bottom: 100
            }
        );

        let outside = rect.offset(1000, 0);
        assert!(outside.clip(20, 100).is_none());
    }
}
