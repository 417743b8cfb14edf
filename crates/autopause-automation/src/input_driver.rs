//! 입력 드라이버 구현.
//!
//! `NoOpInputDriver` (테스트/드라이런용)와 `EnigoInputDriver` (실제 입력)을 제공한다.

use async_trait::async_trait;
use tracing::debug;

use autopause_core::error::CoreError;
use autopause_core::ports::input_driver::InputDriver;

// ============================================================
// NoOpInputDriver: 테스트/드라이런용
// ============================================================

/// No-Op 입력 드라이버: 모든 입력을 로깅만 하고 실행하지 않음
///
/// `--dry-run`, 테스트, enigo 초기화 실패 시 폴백으로 사용.
/// 커서 위치는 항상 원점으로 보고한다.
pub struct NoOpInputDriver;

#[async_trait]
impl InputDriver for NoOpInputDriver {
    async fn cursor_position(&self) -> Result<(i32, i32), CoreError> {
        Ok((0, 0))
    }

    async fn mouse_move(&self, x: i32, y: i32) -> Result<(), CoreError> {
        debug!(x, y, "[NoOp] 마우스 이동");
        Ok(())
    }

    async fn mouse_down(&self) -> Result<(), CoreError> {
        debug!("[NoOp] 왼쪽 버튼 누름");
        Ok(())
    }

    async fn mouse_up(&self) -> Result<(), CoreError> {
        debug!("[NoOp] 왼쪽 버튼 놓음");
        Ok(())
    }

    fn platform(&self) -> &str {
        "noop"
    }
}

// ============================================================
// EnigoInputDriver: 실제 마우스 입력
// ============================================================

/// 실제 마우스 입력 드라이버 (enigo 기반)
///
/// macOS: Accessibility 권한 필요
/// Windows: 대상 창이 관리자 권한이면 이쪽도 관리자 권한 필요
/// Linux: X11 또는 Wayland + uinput 권한 필요
#[cfg(feature = "enigo")]
pub struct EnigoInputDriver {
    /// enigo 인스턴스 (Send지만 !Sync → tokio::sync::Mutex 사용)
    enigo: tokio::sync::Mutex<enigo::Enigo>,
}

#[cfg(feature = "enigo")]
impl EnigoInputDriver {
    /// 새 EnigoInputDriver 생성
    pub fn new() -> Result<Self, CoreError> {
        let settings = enigo::Settings::default();
        let enigo = enigo::Enigo::new(&settings)
            .map_err(|e| CoreError::Input(format!("입력 드라이버 초기화 실패: {e}")))?;
        Ok(Self {
            enigo: tokio::sync::Mutex::new(enigo),
        })
    }

    async fn left_button(&self, direction: enigo::Direction) -> Result<(), CoreError> {
        use enigo::Mouse;
        let mut enigo = self.enigo.lock().await;
        enigo
            .button(enigo::Button::Left, direction)
            .map_err(|e| CoreError::Input(format!("마우스 버튼 {direction:?} 실패: {e}")))
    }
}

#[cfg(feature = "enigo")]
#[async_trait]
impl InputDriver for EnigoInputDriver {
    async fn cursor_position(&self) -> Result<(i32, i32), CoreError> {
        use enigo::Mouse;
        let enigo = self.enigo.lock().await;
        enigo
            .location()
            .map_err(|e| CoreError::Input(format!("커서 위치 조회 실패: {e}")))
    }

    async fn mouse_move(&self, x: i32, y: i32) -> Result<(), CoreError> {
        use enigo::Mouse;
        debug!(x, y, "[Enigo] 마우스 이동");
        let mut enigo = self.enigo.lock().await;
        enigo
            .move_mouse(x, y, enigo::Coordinate::Abs)
            .map_err(|e| CoreError::Input(format!("마우스 이동 실패: {e}")))
    }

    async fn mouse_down(&self) -> Result<(), CoreError> {
        debug!("[Enigo] 왼쪽 버튼 누름");
        self.left_button(enigo::Direction::Press).await
    }

    async fn mouse_up(&self) -> Result<(), CoreError> {
        debug!("[Enigo] 왼쪽 버튼 놓음");
        self.left_button(enigo::Direction::Release).await
    }

    fn platform(&self) -> &str {
        #[cfg(target_os = "macos")]
        {
            "macos"
        }
        #[cfg(target_os = "windows")]
        {
            "windows"
        }
        #[cfg(target_os = "linux")]
        {
            "linux"
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            "unknown"
        }
    }
}

/// 플랫폼별 입력 드라이버 생성 팩토리
///
/// `enigo` feature 활성화 시 실제 입력 드라이버 반환,
/// 비활성화되었거나 초기화에 실패하면 NoOp 드라이버 반환.
pub fn create_platform_input_driver() -> Box<dyn InputDriver> {
    #[cfg(feature = "enigo")]
    {
        match EnigoInputDriver::new() {
            Ok(driver) => {
                tracing::info!("실제 입력 드라이버 (enigo) 초기화 완료");
                return Box::new(driver);
            }
            Err(e) => {
                tracing::warn!("enigo 초기화 실패, NoOp 폴백: {e}");
            }
        }
    }
    Box::new(NoOpInputDriver)
}

// ============================================================
// 테스트
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_driver_all_methods_ok() {
        let driver = NoOpInputDriver;
        assert_eq!(driver.cursor_position().await.unwrap(), (0, 0));
        assert!(driver.mouse_move(100, 200).await.is_ok());
        assert!(driver.mouse_down().await.is_ok());
        assert!(driver.mouse_up().await.is_ok());
    }

    #[test]
    fn noop_driver_platform() {
        let driver = NoOpInputDriver;
        assert_eq!(driver.platform(), "noop");
    }

    #[cfg(not(feature = "enigo"))]
    #[test]
    fn factory_without_enigo_is_noop() {
        let driver = create_platform_input_driver();
        assert_eq!(driver.platform(), "noop");
    }
}
