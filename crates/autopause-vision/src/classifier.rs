//! 프레임 분류기.
//!
//! 디스플레이마다 네 랜드마크 점수를 계산하고, 집계 신뢰도가 가장 높은 디스플레이를
//! 골라 그 점수로 애플리케이션 상태를 결정한다.

use autopause_core::models::frame::DisplayFrame;
use autopause_core::models::geometry::{RegionDescriptor, WindowBounds};
use autopause_core::models::landmark::{DetectionProfile, Landmark, LandmarkScores, FAILED_SCORE};
use autopause_core::models::state::{ApplicationState, ClickPoint, DetectionResult};
use image::imageops;
use image::RgbaImage;
use tracing::debug;

use crate::phash::Fingerprint;
use crate::similarity::score;
use crate::templates::TemplateSet;

/// 랜드마크 일치 임계값
pub const MATCH_THRESHOLD: f64 = 0.7;

/// 프레임 분류기: 영역 프로필과 템플릿 지문을 소유
#[derive(Debug, Clone)]
pub struct FrameClassifier {
    profile: DetectionProfile,
    templates: TemplateSet,
}

impl FrameClassifier {
    pub fn new(profile: DetectionProfile, templates: TemplateSet) -> Self {
        Self { profile, templates }
    }

    pub fn profile(&self) -> &DetectionProfile {
        &self.profile
    }

    /// 일시정지 영역 중심 (분류와 무관)
    pub fn click_target(&self, bounds: &WindowBounds) -> ClickPoint {
        let (x, y) = self.profile.pause.center(bounds);
        ClickPoint { x, y }
    }

    /// 디스플레이 한 개의 랜드마크 점수
    pub fn score_display(&self, frame: &DisplayFrame, bounds: &WindowBounds) -> LandmarkScores {
        let pause = self.fingerprint_region(frame, &self.profile.pause, bounds);
        let substitute = self.fingerprint_region(frame, &self.profile.substitute, bounds);
        let settings = self.fingerprint_region(frame, &self.profile.settings, bounds);

        let match_with = |crop: Option<Fingerprint>, landmark: Landmark| -> f64 {
            crop.map_or(FAILED_SCORE, |fp| {
                score(&fp, &self.templates.fingerprint(landmark))
            })
        };

        [
            (Landmark::Pause, match_with(pause, Landmark::Pause)),
            (Landmark::Resume, match_with(pause, Landmark::Resume)),
            (Landmark::Substitute, match_with(substitute, Landmark::Substitute)),
            (Landmark::Settings, match_with(settings, Landmark::Settings)),
        ]
        .into_iter()
        .collect()
    }

    /// 전체 디스플레이 프레임 분류
    pub fn classify(&self, frames: &[DisplayFrame], bounds: &WindowBounds) -> DetectionResult {
        let scored = frames.iter().map(|frame| {
            let scores = self.score_display(frame, bounds);
            debug!(
                display = frame.index,
                total = scores.total(),
                "디스플레이 점수: {scores}"
            );
            (frame.index, scores)
        });

        let (display_index, scores) = match select_display(scored) {
            Some((index, scores)) => (Some(index), scores),
            None => (None, LandmarkScores::new()),
        };

        DetectionResult {
            state: decide_state(&scores),
            display_index,
            scores,
            click_target: Some(self.click_target(bounds)),
        }
    }

    fn fingerprint_region(
        &self,
        frame: &DisplayFrame,
        region: &RegionDescriptor,
        bounds: &WindowBounds,
    ) -> Option<Fingerprint> {
        let crop = crop_region(frame, region, bounds)?;
        Fingerprint::of(&crop)
            .map_err(|e| debug!(display = frame.index, "지문 계산 실패: {e}"))
            .ok()
    }
}

/// 디스플레이 로컬 좌표로 옮긴 영역을 비트맵 범위 안에서 잘라낸다.
///
/// 영역이 디스플레이와 겹치지 않으면 `None`.
pub fn crop_region(
    frame: &DisplayFrame,
    region: &RegionDescriptor,
    bounds: &WindowBounds,
) -> Option<RgbaImage> {
    let rect = region
        .rect(bounds)
        .offset(-frame.origin_x, -frame.origin_y)
        .clip(frame.width(), frame.height())?;

    Some(
        imageops::crop_imm(
            &frame.image,
            rect.left as u32,
            rect.top as u32,
            rect.width() as u32,
            rect.height() as u32,
        )
        .to_image(),
    )
}

/// 집계 신뢰도가 가장 큰 디스플레이 선택.
///
/// 순서대로 접어 가며 더 *큰* 값일 때만 교체하므로 동점이면 먼저 나온 인덱스가 남는다.
pub fn select_display<I>(candidates: I) -> Option<(usize, LandmarkScores)>
where
    I: IntoIterator<Item = (usize, LandmarkScores)>,
{
    candidates
        .into_iter()
        .fold(None, |best: Option<(usize, f64, LandmarkScores)>, (index, scores)| {
            let total = scores.total();
            match best {
                Some((_, best_total, _)) if total <= best_total => best,
                _ => Some((index, total, scores)),
            }
        })
        .map(|(index, _, scores)| (index, scores))
}

/// 선택된 디스플레이 점수로 상태 결정.
///
/// 교체/설정 랜드마크가 모두 임계값 미만이면 일시정지 버튼 점수와 관계없이 `InGame`.
pub fn decide_state(scores: &LandmarkScores) -> ApplicationState {
    let t = MATCH_THRESHOLD;

    if scores.get(Landmark::Substitute) < t && scores.get(Landmark::Settings) < t {
        return ApplicationState::InGame;
    }

    if scores.get(Landmark::Pause) > t {
        ApplicationState::Combat
    } else if scores.get(Landmark::Resume) > t {
        ApplicationState::Paused
    } else {
        ApplicationState::InGame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(substitute: f64, settings: f64, pause: f64, resume: f64) -> LandmarkScores {
        [
            (Landmark::Substitute, substitute),
            (Landmark::Settings, settings),
            (Landmark::Pause, pause),
            (Landmark::Resume, resume),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn overlay_absent_wins_over_pause_match() {
        assert_eq!(
            decide_state(&scores(0.2, 0.3, 0.8, 0.1)),
            ApplicationState::InGame
        );
    }

    #[test]
    fn substitute_visible_and_pause_matched_is_combat() {
        assert_eq!(
            decide_state(&scores(0.9, 0.2, 0.75, 0.1)),
            ApplicationState::Combat
        );
    }

    #[test]
    fn resume_matched_is_paused() {
        assert_eq!(
            decide_state(&scores(0.2, 0.9, 0.5, 0.8)),
            ApplicationState::Paused
        );
    }

    #[test]
    fn overlay_without_glyph_is_in_game() {
        assert_eq!(
            decide_state(&scores(0.8, 0.8, 0.6, 0.6)),
            ApplicationState::InGame
        );
    }

    #[test]
    fn threshold_is_strict_for_glyphs() {
        // pause == T 는 일치가 아님
        assert_eq!(
            decide_state(&scores(0.9, 0.9, 0.7, 0.1)),
            ApplicationState::InGame
        );
        // substitute == T 는 오버레이 있음으로 본다
        assert_eq!(
            decide_state(&scores(0.7, 0.0, 0.9, 0.0)),
            ApplicationState::Combat
        );
    }

    #[test]
    fn failed_scores_never_match() {
        let failed = scores(FAILED_SCORE, FAILED_SCORE, FAILED_SCORE, FAILED_SCORE);
        assert_eq!(decide_state(&failed), ApplicationState::InGame);
        assert_eq!(decide_state(&LandmarkScores::new()), ApplicationState::InGame);
    }

    #[test]
    fn select_display_prefers_highest_total() {
        let picked = select_display([
            (0, scores(0.1, 0.1, 0.1, 0.1)),
            (1, scores(0.9, 0.9, 0.9, 0.1)),
            (2, scores(0.5, 0.5, 0.5, 0.5)),
        ])
        .unwrap();
        assert_eq!(picked.0, 1);
    }

    #[test]
    fn select_display_ties_keep_lowest_index() {
        let picked = select_display([
            (0, scores(0.25, 0.25, 0.25, 0.25)),
            (1, scores(0.5, 0.5, 0.5, 0.5)),
            (2, scores(0.5, 0.5, 0.5, 0.5)),
        ])
        .unwrap();
        assert_eq!(picked.0, 1);
    }

    #[test]
    fn select_display_accepts_all_failed() {
        let failed = scores(FAILED_SCORE, FAILED_SCORE, FAILED_SCORE, FAILED_SCORE);
        let picked = select_display([(0, failed.clone()), (1, failed)]).unwrap();
        assert_eq!(picked.0, 0);
        assert!(select_display(Vec::new()).is_none());
    }
}
