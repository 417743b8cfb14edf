//! 클릭 디스패처.
//!
//! 일시정지 버튼을 클릭한 뒤 커서를 원래 위치로 되돌린다.
//! 순서: 커서 저장 → 이동 → 누름 → 대기 → 놓음 → 대기 → 복원.

use std::sync::Arc;
use std::time::Duration;

use autopause_core::error::CoreError;
use autopause_core::models::state::ClickPoint;
use autopause_core::ports::input_driver::InputDriver;
use tracing::{debug, warn};

/// 커서 복원 클릭 디스패처
pub struct ClickDispatcher {
    driver: Arc<dyn InputDriver>,
    /// 누름/놓음 각각 뒤에 쉬는 시간
    hold: Duration,
}

impl ClickDispatcher {
    pub fn new(driver: Arc<dyn InputDriver>, hold: Duration) -> Self {
        Self { driver, hold }
    }

    pub fn driver_platform(&self) -> &str {
        self.driver.platform()
    }

    /// 클릭 후 커서 복원. 실제로 클릭한 픽셀 좌표를 반환한다.
    ///
    /// 소수 좌표는 0 방향으로 잘라낸다. 중간 단계가 실패해도 누른 버튼은 놓고
    /// 커서는 원래 위치로 되돌린 뒤 첫 번째 에러를 반환한다.
    pub async fn click_and_restore(&self, point: ClickPoint) -> Result<(i32, i32), CoreError> {
        let (x, y) = point.to_pixel();
        let (orig_x, orig_y) = self.driver.cursor_position().await?;

        let clicked = self.press_and_release(x, y).await;
        let restored = self.driver.mouse_move(orig_x, orig_y).await;

        if let Err(ref e) = restored {
            warn!(orig_x, orig_y, "커서 복원 실패: {e}");
        }
        clicked.and(restored)?;

        debug!(x, y, orig_x, orig_y, "클릭 완료, 커서 복원");
        Ok((x, y))
    }

    /// 이동 → 누름 → 대기 → 놓음 → 대기. 누름이 성공했으면 놓음은 항상 시도한다.
    async fn press_and_release(&self, x: i32, y: i32) -> Result<(), CoreError> {
        self.driver.mouse_move(x, y).await?;
        self.driver.mouse_down().await?;
        tokio::time::sleep(self.hold).await;
        let released = self.driver.mouse_up().await;
        tokio::time::sleep(self.hold).await;
        released
    }
}
