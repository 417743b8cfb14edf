//! 프로세스 권한 확인.
//!
//! 대상 프로그램이 관리자 권한으로 실행 중이면 일반 권한 프로세스의 합성 입력은
//! 무시된다. 클릭 로그에 안내를 덧붙이기 위해 시작 시 한 번 확인한다.

/// 합성 입력을 대상 창에 전달할 수 있는 권한으로 실행 중인지 여부.
///
/// Windows 외 플랫폼에는 이런 제약이 없으므로 항상 `true`.
pub fn is_elevated() -> bool {
    #[cfg(target_os = "windows")]
    {
        crate::windows::is_elevated()
    }
    #[cfg(not(target_os = "windows"))]
    {
        true
    }
}
