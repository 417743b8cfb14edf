//! Windows 플랫폼: 클라이언트 영역, DPI 인식, 관리자 권한.
//!
//! Win32 API `GetClientRect` + `ClientToScreen`, `SetProcessDpiAwarenessContext`,
//! `CreateFileW` 기반.

#![cfg(target_os = "windows")]

use std::ffi::c_void;

use autopause_core::models::geometry::WindowBounds;
use tracing::{debug, warn};
use windows_sys::Win32::Foundation::{
    CloseHandle, GetLastError, GENERIC_READ, HWND, INVALID_HANDLE_VALUE, POINT, RECT,
};
use windows_sys::Win32::Graphics::Gdi::ClientToScreen;
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_READ, FILE_SHARE_WRITE, OPEN_EXISTING,
};
use windows_sys::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows_sys::Win32::UI::WindowsAndMessaging::GetClientRect;

/// 모니터별 DPI 인식 활성화. 이미 설정된 경우 실패하지만 무시한다.
pub fn enable_dpi_awareness() {
    let ok = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };
    if ok == 0 {
        let code = unsafe { GetLastError() };
        debug!("DPI 인식 설정 실패 (이미 설정됨?): code {code}");
    } else {
        debug!("DPI 인식: per-monitor v2");
    }
}

/// 창 핸들의 클라이언트 영역 (절대 화면 좌표)
///
/// xcap은 창 id로 HWND 값을 돌려준다. 크기가 0이거나 API 호출이 실패하면 `None`.
pub fn client_bounds(window_id: u32) -> Option<WindowBounds> {
    let hwnd = window_id as usize as *mut c_void as HWND;

    unsafe {
        let mut rect: RECT = std::mem::zeroed();
        if GetClientRect(hwnd, &mut rect) == 0 {
            debug!("GetClientRect 실패: code {}", GetLastError());
            return None;
        }

        let mut origin = POINT { x: 0, y: 0 };
        if ClientToScreen(hwnd, &mut origin) == 0 {
            debug!("ClientToScreen 실패");
            return None;
        }

        let width = rect.right - rect.left;
        let height = rect.bottom - rect.top;
        if width <= 0 || height <= 0 {
            return None;
        }

        Some(WindowBounds::new(
            origin.x,
            origin.y,
            origin.x + width,
            origin.y + height,
        ))
    }
}

/// 관리자 권한 여부.
///
/// 첫 번째 물리 디스크는 관리자만 열 수 있으므로 열기 성공 여부로 판단한다.
pub fn is_elevated() -> bool {
    let path: Vec<u16> = r"\\.\PHYSICALDRIVE0"
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    unsafe {
        let handle = CreateFileW(
            path.as_ptr(),
            GENERIC_READ,
            FILE_SHARE_READ | FILE_SHARE_WRITE,
            std::ptr::null(),
            OPEN_EXISTING,
            0,
            std::ptr::null_mut(),
        );

        if handle == INVALID_HANDLE_VALUE {
            return false;
        }

        if CloseHandle(handle) == 0 {
            warn!("디스크 핸들 닫기 실패");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_handle_has_no_client_area() {
        assert!(client_bounds(0).is_none());
    }
}
