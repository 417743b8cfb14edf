//! 랜드마크 영역 디버그 덤프.
//!
//! 상태가 바뀐 주기에 선택된 디스플레이의 랜드마크 영역을 PNG로 저장한다.
//! 템플릿 이미지를 새로 만들거나 오분류 원인을 확인할 때 쓴다.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use autopause_core::error::CoreError;
use autopause_core::models::frame::DisplayFrame;
use autopause_core::models::geometry::WindowBounds;
use autopause_core::models::landmark::{DetectionProfile, Landmark};
use autopause_core::models::state::ApplicationState;
use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::classifier::crop_region;

/// 덤프 대상 영역. 재개 버튼은 일시정지 영역을 공유하므로 따로 저장하지 않는다.
const DUMP_LANDMARKS: [Landmark; 3] = [Landmark::Pause, Landmark::Substitute, Landmark::Settings];

/// 영역 크롭 덤프 저장소
pub struct CropDumper {
    base_dir: PathBuf,
    counter: AtomicU32,
}

impl CropDumper {
    /// 덤프 디렉토리 생성 후 저장소 반환
    pub fn new(base_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&base_dir).map_err(|e| {
            CoreError::Config(format!(
                "덤프 디렉토리 생성 실패: {}: {e}",
                base_dir.display()
            ))
        })?;
        info!("크롭 덤프 활성화: {}", base_dir.display());

        Ok(Self {
            base_dir,
            counter: AtomicU32::new(0),
        })
    }

    /// 세 영역을 잘라 저장하고 저장된 경로 목록 반환.
    ///
    /// 파일명: `YYYY-MM-DD/HH-MM-SS-NNN-<state>-<region>.png`
    pub fn dump(
        &self,
        timestamp: DateTime<Local>,
        state: ApplicationState,
        frame: &DisplayFrame,
        bounds: &WindowBounds,
        profile: &DetectionProfile,
    ) -> Result<Vec<PathBuf>, CoreError> {
        let day_dir = self.base_dir.join(timestamp.format("%Y-%m-%d").to_string());
        fs::create_dir_all(&day_dir)?;

        let counter = self.counter.fetch_add(1, Ordering::SeqCst) % 1000;
        let prefix = format!(
            "{}-{counter:03}-{}",
            timestamp.format("%H-%M-%S"),
            state.display_name().to_lowercase()
        );

        let mut saved = Vec::with_capacity(DUMP_LANDMARKS.len());
        for landmark in DUMP_LANDMARKS {
            let Some(crop) = crop_region(frame, &profile.region(landmark), bounds) else {
                debug!(display = frame.index, "덤프 건너뜀, 영역이 화면 밖: {landmark}");
                continue;
            };

            let path = day_dir.join(format!("{prefix}-{landmark}.png"));
            crop.save(&path).map_err(|e| {
                CoreError::Internal(format!("크롭 저장 실패: {}: {e}", path.display()))
            })?;
            saved.push(path);
        }

        debug!("크롭 덤프 {}개 저장: {prefix}", saved.len());
        Ok(saved)
    }
}
