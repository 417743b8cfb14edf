//! # autopause-monitor
//!
//! 창 탐색 어댑터.
//! 제목 정규식으로 대상 창을 찾아 클라이언트 영역을 절대 화면 좌표로 돌려주고,
//! 클릭 주입에 필요한 프로세스 권한을 확인한다.
//! Windows에서는 Win32 API로 클라이언트 영역과 DPI 인식을 보정한다.

pub mod privilege;
pub mod window;

#[cfg(target_os = "windows")]
pub mod windows;

/// 프로세스 시작 시 한 번 호출하는 플랫폼 초기화.
///
/// Windows: 모니터별 DPI 인식을 켜서 창 좌표와 캡처 좌표를 물리 픽셀로 맞춘다.
pub fn init_platform() {
    #[cfg(target_os = "windows")]
    crate::windows::enable_dpi_awareness();
}
