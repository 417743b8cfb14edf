//! 애플리케이션 상태 분류 결과.
//!
//! 매 주기마다 처음부터 다시 분류한다. 주기를 넘어 유지되는 값은
//! 폴링 루프가 보관하는 직전 상태 하나뿐이다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::landmark::LandmarkScores;

/// 분류된 애플리케이션 상태 (전순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationState {
    /// 캡처 실패
    Error,
    /// 대상 창 없음
    OutOfGame,
    /// 창은 있지만 처리할 오버레이 없음
    InGame,
    /// 전투 중 (일시정지 버튼 인식)
    Combat,
    /// 일시정지됨 (재개 버튼 인식)
    Paused,
}

impl ApplicationState {
    /// 상태 출력 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationState::Error => "Error",
            ApplicationState::OutOfGame => "OutGame",
            ApplicationState::InGame => "InGame",
            ApplicationState::Combat => "Combat",
            ApplicationState::Paused => "Pause",
        }
    }
}

impl fmt::Display for ApplicationState {
    // `{:>7}` 같은 폭 지정을 따르도록 pad 사용
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// 클릭 대상 좌표 (절대 화면 좌표)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

impl ClickPoint {
    /// 입력 드라이버용 정수 좌표 (잘라냄)
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// 한 주기의 분류 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// 분류된 상태
    pub state: ApplicationState,
    /// 선택된 디스플레이 인덱스
    pub display_index: Option<usize>,
    /// 선택된 디스플레이의 랜드마크 점수
    pub scores: LandmarkScores,
    /// 일시정지 영역 중심. 창 영역을 알면 분류와 무관하게 항상 계산된다.
    pub click_target: Option<ClickPoint>,
}

impl DetectionResult {
    /// 창 미발견
    pub fn out_of_game() -> Self {
        Self {
            state: ApplicationState::OutOfGame,
            display_index: None,
            scores: LandmarkScores::new(),
            click_target: None,
        }
    }

    /// 캡처 실패 (창 영역은 알고 있음)
    pub fn error(click_target: ClickPoint) -> Self {
        Self {
            state: ApplicationState::Error,
            display_index: None,
            scores: LandmarkScores::new(),
            click_target: Some(click_target),
        }
    }

    /// 주기별 상태 출력 한 줄
    pub fn status_line(&self) -> String {
        format!("[{:>7}] {}", self.state, self.scores)
    }
}
