//! AutoPause 핵심 에러 타입.
//!
//! 어댑터 crate는 외부 라이브러리 에러를 문자열로 변환하여 여기 정의된 변형에 담는다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 ({field}): {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 창 목록 조회 실패 (창 미발견은 에러가 아니라 `Ok(None)`)
    #[error("창 조회 에러: {0}")]
    Window(String),

    /// 스크린 캡처 실패
    #[error("스크린 캡처 실패: {0}")]
    Capture(String),

    /// 지문(perceptual hash) 계산 실패
    #[error("지문 계산 실패: {0}")]
    Fingerprint(String),

    /// 템플릿 이미지 로드 실패
    #[error("템플릿 로드 실패 ({name}): {message}")]
    Template {
        /// 랜드마크 이름
        name: String,
        /// 실패 사유
        message: String,
    },

    /// 마우스 입력 실패
    #[error("입력 에러: {0}")]
    Input(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}
