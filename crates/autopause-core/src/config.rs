//! 애플리케이션 설정 구조체.
//!
//! 대상 창 제목 패턴, 폴링 주기, 클릭 유지 시간, 템플릿 경로 등 런타임 설정을 정의한다.
//! 파일에서 로드한 뒤 CLI 인자로 덮어쓴다 (`config_manager`, `autopause-app`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CoreError;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 대상 창 설정
    #[serde(default)]
    pub target: TargetConfig,
    /// 폴링 루프 설정
    #[serde(default)]
    pub scheduler: SchedulerSettings,
    /// 클릭 설정
    #[serde(default)]
    pub click: ClickConfig,
    /// 템플릿 이미지 설정
    #[serde(default)]
    pub templates: TemplateConfig,
    /// 디버그 설정
    #[serde(default)]
    pub debug: DebugConfig,
}

// ============================================================
// 대상 창
// ============================================================

/// 대상 창 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// 창 제목 정규식 (첫 번째로 일치한 창을 사용)
    #[serde(default = "default_title_pattern")]
    pub title_pattern: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            title_pattern: default_title_pattern(),
        }
    }
}

// ============================================================
// 폴링 루프
// ============================================================

/// 폴링 루프 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    /// 초당 감지 횟수
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// 캡처 실패 시 루프 중단 여부. false면 `Error`로 분류하고 계속 진행.
    #[serde(default)]
    pub halt_on_capture_failure: bool,
}

impl SchedulerSettings {
    /// 한 주기의 목표 시간 (`1000 / fps` ms)
    pub fn period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            halt_on_capture_failure: false,
        }
    }
}

// ============================================================
// 클릭
// ============================================================

/// 클릭 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickConfig {
    /// 버튼을 누르고 있는 시간 (밀리초)
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

impl ClickConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
        }
    }
}

// ============================================================
// 템플릿
// ============================================================

/// 템플릿 이미지 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// `pause.png`, `resume.png`, `substitute.png`, `settings.png`가 있는 디렉토리
    #[serde(default = "default_template_dir")]
    pub dir: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
        }
    }
}

// ============================================================
// 디버그
// ============================================================

/// 디버그 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 상태가 바뀔 때 선택된 디스플레이의 랜드마크 영역을 PNG로 저장할 디렉토리
    #[serde(default)]
    pub dump_dir: Option<PathBuf>,
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            target: TargetConfig::default(),
            scheduler: SchedulerSettings::default(),
            click: ClickConfig::default(),
            templates: TemplateConfig::default(),
            debug: DebugConfig::default(),
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.scheduler.fps == 0 {
            return Err(CoreError::Validation {
                field: "scheduler.fps".to_string(),
                message: "0보다 커야 함".to_string(),
            });
        }

        Regex::new(&self.target.title_pattern).map_err(|e| CoreError::Validation {
            field: "target.title_pattern".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn default_title_pattern() -> String {
    r"白荆回廊\[[0-9.]+\]".to_string()
}
fn default_fps() -> u32 {
    10
}
fn default_hold_ms() -> u64 {
    10
}
fn default_template_dir() -> PathBuf {
    PathBuf::from("assets").join("templates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_fps() {
        let settings = SchedulerSettings {
            fps: 10,
            halt_on_capture_failure: false,
        };
        assert_eq!(settings.period(), Duration::from_millis(100));
    }

    #[test]
    fn default_pattern_matches_versioned_title() {
        let config = AppConfig::default_config();
        let re = Regex::new(&config.target.title_pattern).unwrap();
        assert!(re.is_match("白荆回廊[1.2.3]"));
        assert!(!re.is_match("白荆回廊"));
    }

    #[test]
    fn validate_rejects_zero_fps() {
        let mut config = AppConfig::default_config();
        config.scheduler.fps = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "scheduler.fps"));
    }

    #[test]
    fn validate_rejects_bad_regex() {
        let mut config = AppConfig::default_config();
        config.target.title_pattern = "[unclosed".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"scheduler": {"fps": 5}}"#).unwrap();
        assert_eq!(config.scheduler.fps, 5);
        assert_eq!(config.click.hold_ms, 10);
        assert_eq!(config.templates.dir, PathBuf::from("assets").join("templates"));
    }
}
