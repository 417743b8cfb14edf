//! 대상 창 탐색.
//!
//! `WindowLocator` 포트 구현. xcap으로 최상위 창을 열거하고 제목 정규식과
//! 처음 일치한 창의 클라이언트 영역을 돌려준다.

use autopause_core::error::CoreError;
use autopause_core::models::geometry::WindowBounds;
use autopause_core::ports::window::{LocatedWindow, WindowLocator};
use regex::Regex;
use tracing::{debug, trace};
use xcap::Window;

/// 열거된 창 한 개의 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCandidate {
    pub title: String,
    pub minimized: bool,
    pub bounds: Option<WindowBounds>,
}

/// 보이는 창 중 제목이 패턴과 일치하는 첫 번째 창 선택.
///
/// 최소화된 창, 제목이 빈 창, 영역을 얻지 못한 창은 건너뛴다.
pub fn select_window<I>(candidates: I, pattern: &Regex) -> Option<LocatedWindow>
where
    I: IntoIterator<Item = WindowCandidate>,
{
    candidates.into_iter().find_map(|candidate| {
        if candidate.minimized || candidate.title.is_empty() {
            return None;
        }
        if !pattern.is_match(&candidate.title) {
            return None;
        }
        let bounds = candidate.bounds?;
        Some(LocatedWindow {
            title: candidate.title,
            bounds,
        })
    })
}

/// 창 탐색기: xcap 기반
pub struct XcapWindowLocator {
    pattern: Regex,
}

impl XcapWindowLocator {
    /// 제목 정규식으로 생성
    pub fn new(title_pattern: &str) -> Result<Self, CoreError> {
        let pattern = Regex::new(title_pattern).map_err(|e| CoreError::Validation {
            field: "target.title_pattern".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    fn describe(window: &Window) -> Option<WindowCandidate> {
        // 조회 도중 닫힌 창은 건너뛴다
        let title = window.title().ok()?;
        let minimized = window.is_minimized().unwrap_or(false);

        Some(WindowCandidate {
            bounds: Self::bounds_of(window),
            title,
            minimized,
        })
    }

    #[cfg(target_os = "windows")]
    fn bounds_of(window: &Window) -> Option<WindowBounds> {
        // 테두리와 제목 표시줄을 제외한 클라이언트 영역 사용
        window
            .id()
            .ok()
            .and_then(crate::windows::client_bounds)
            .or_else(|| Self::outer_bounds(window))
    }

    #[cfg(not(target_os = "windows"))]
    fn bounds_of(window: &Window) -> Option<WindowBounds> {
        Self::outer_bounds(window)
    }

    fn outer_bounds(window: &Window) -> Option<WindowBounds> {
        let x = window.x().ok()?;
        let y = window.y().ok()?;
        let width = window.width().ok()? as i32;
        let height = window.height().ok()? as i32;
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(WindowBounds::new(x, y, x + width, y + height))
    }
}

impl WindowLocator for XcapWindowLocator {
    fn locate(&self) -> Result<Option<LocatedWindow>, CoreError> {
        let windows =
            Window::all().map_err(|e| CoreError::Window(format!("창 목록 조회 실패: {e}")))?;
        trace!("창 {}개 열거", windows.len());

        let located = select_window(windows.iter().filter_map(Self::describe), &self.pattern);
        if let Some(window) = &located {
            debug!(title = %window.title, bounds = ?window.bounds, "대상 창 일치");
        }
        Ok(located)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        Regex::new(r"白荆回廊\[[0-9.]+\]").unwrap()
    }

    fn candidate(title: &str, minimized: bool, left: i32) -> WindowCandidate {
        WindowCandidate {
            title: title.to_string(),
            minimized,
            bounds: Some(WindowBounds::new(left, 0, left + 1280, 720)),
        }
    }

    #[test]
    fn first_match_wins() {
        let located = select_window(
            [
                candidate("메모장", false, 0),
                candidate("白荆回廊[1.0.3]", false, 100),
                candidate("白荆回廊[1.0.4]", false, 200),
            ],
            &pattern(),
        )
        .unwrap();
        assert_eq!(located.title, "白荆回廊[1.0.3]");
        assert_eq!(located.bounds.left, 100);
    }

    #[test]
    fn minimized_and_untitled_are_skipped() {
        let located = select_window(
            [
                candidate("白荆回廊[1.0.3]", true, 0),
                candidate("", false, 50),
                candidate("白荆回廊[2.1]", false, 300),
            ],
            &pattern(),
        )
        .unwrap();
        assert_eq!(located.bounds.left, 300);
    }

    #[test]
    fn window_without_bounds_is_skipped() {
        let mut broken = candidate("白荆回廊[1.0]", false, 0);
        broken.bounds = None;
        assert!(select_window([broken], &pattern()).is_none());
    }

    #[test]
    fn no_match_is_none() {
        assert!(select_window([candidate("白荆回廊", false, 0)], &pattern()).is_none());
        assert!(select_window(Vec::new(), &pattern()).is_none());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(matches!(
            XcapWindowLocator::new("(unclosed"),
            Err(CoreError::Validation { .. })
        ));
        assert!(XcapWindowLocator::new("abc").is_ok());
    }
}
