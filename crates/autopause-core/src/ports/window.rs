//! 창 탐색 포트.
//!
//! 구현: `autopause-monitor` crate (xcap + Windows 클라이언트 영역 보정)

use crate::error::CoreError;
use crate::models::geometry::WindowBounds;

/// 제목 패턴과 일치한 창
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedWindow {
    /// 창 제목
    pub title: String,
    /// 클라이언트 영역 (절대 화면 좌표)
    pub bounds: WindowBounds,
}

/// 대상 창 탐색기
pub trait WindowLocator: Send + Sync {
    /// 대상 창을 찾아 현재 클라이언트 영역을 반환.
    ///
    /// 창이 없으면 `Ok(None)`. 다음 주기에 다시 시도한다.
    fn locate(&self) -> Result<Option<LocatedWindow>, CoreError>;
}
