//! 입력 드라이버 포트.
//!
//! 커서 위치 조회/이동과 마우스 왼쪽 버튼 누름/놓음만 다룬다.

use async_trait::async_trait;

use crate::error::CoreError;

/// 입력 드라이버: 마우스 시뮬레이션 인터페이스
///
/// 구현체: `EnigoInputDriver` (실제 입력), `NoOpInputDriver` (테스트/드라이런용)
#[async_trait]
pub trait InputDriver: Send + Sync {
    /// 현재 커서 위치
    async fn cursor_position(&self) -> Result<(i32, i32), CoreError>;

    /// 커서를 절대 좌표로 이동
    async fn mouse_move(&self, x: i32, y: i32) -> Result<(), CoreError>;

    /// 왼쪽 버튼 누름
    async fn mouse_down(&self) -> Result<(), CoreError>;

    /// 왼쪽 버튼 놓음
    async fn mouse_up(&self) -> Result<(), CoreError>;

    /// 플랫폼 이름 (예: "macos", "windows", "linux")
    fn platform(&self) -> &str;
}
