//! 감지 루프 스케줄러.
//!
//! 고정 주기로 창 탐색 → 캡처 → 분류 → 상태 출력 → (필요 시) 클릭을 반복한다.
//! 주기가 겹치지 않도록 한 태스크에서 순차 실행하고, 남은 시간만큼 잔다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use autopause_automation::dispatcher::ClickDispatcher;
use autopause_automation::trigger::EdgeTrigger;
use autopause_core::error::CoreError;
use autopause_core::models::state::{ApplicationState, DetectionResult};
use autopause_vision::detector::{CycleDetection, StateDetector};
use autopause_vision::dump::CropDumper;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// 관리자 권한이 없을 때 클릭 로그에 붙이는 안내
pub const PRIVILEGE_HINT: &str = "(관리자 권한 아님, 클릭이 무시될 수 있음)";

/// 스케줄러 설정
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// 한 주기의 목표 시간
    pub period: Duration,
    /// 캡처 실패 시 루프 중단 여부
    pub halt_on_capture_failure: bool,
    /// 합성 입력 권한 보유 여부
    pub elevated: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(100),
            halt_on_capture_failure: false,
            elevated: true,
        }
    }
}

/// 한 주기 처리 결과
#[derive(Debug)]
pub struct CycleOutcome {
    pub result: DetectionResult,
    /// 클릭한 픽셀 좌표 (클릭한 경우)
    pub clicked: Option<(i32, i32)>,
    /// 이번 주기에 stdout으로 출력한 줄
    pub output: Vec<String>,
}

/// 감지 루프 스케줄러
pub struct PauseScheduler {
    config: SchedulerConfig,
    detector: Arc<StateDetector>,
    dispatcher: ClickDispatcher,
    dumper: Option<CropDumper>,
}

impl PauseScheduler {
    pub fn new(
        config: SchedulerConfig,
        detector: StateDetector,
        dispatcher: ClickDispatcher,
    ) -> Self {
        Self {
            config,
            detector: Arc::new(detector),
            dispatcher,
            dumper: None,
        }
    }

    /// 상태 변화 시 크롭 덤프 활성화
    pub fn with_dumper(mut self, dumper: CropDumper) -> Self {
        self.dumper = Some(dumper);
        self
    }

    /// 종료 신호가 올 때까지 루프 실행.
    ///
    /// 캡처 실패로 중단하도록 설정된 경우 그 에러를 반환한다.
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> Result<(), CoreError> {
        info!(
            "감지 루프 시작: 주기={}ms, 캡처 실패 시 중단={}, 입력 드라이버={}",
            self.config.period.as_millis(),
            self.config.halt_on_capture_failure,
            self.dispatcher.driver_platform()
        );

        let mut trigger = EdgeTrigger::new();

        loop {
            if *shutdown_rx.borrow() {
                break;
            }

            let started = Instant::now();
            self.run_cycle(&mut trigger).await?;
            let elapsed = started.elapsed();

            match self.config.period.checked_sub(elapsed) {
                Some(remaining) => {
                    tokio::select! {
                        _ = tokio::time::sleep(remaining) => {}
                        _ = shutdown_rx.changed() => {
                            break;
                        }
                    }
                }
                None => warn!(
                    "주기 초과: {}ms (목표 {}ms)",
                    elapsed.as_millis(),
                    self.config.period.as_millis()
                ),
            }
        }

        info!("감지 루프 종료");
        Ok(())
    }

    /// 한 주기 처리
    pub async fn run_cycle(&self, trigger: &mut EdgeTrigger) -> Result<CycleOutcome, CoreError> {
        // 캡처와 지문 계산은 블로킹 작업이므로 별도 스레드에서 실행
        let detector = Arc::clone(&self.detector);
        let CycleDetection {
            result,
            bounds,
            frames,
            capture_error,
        } = tokio::task::spawn_blocking(move || detector.detect())
            .await
            .map_err(|e| CoreError::Internal(format!("감지 태스크 실패: {e}")))?;

        if let Some(e) = capture_error {
            if self.config.halt_on_capture_failure {
                error!("캡처 실패로 감지 루프 중단: {e}");
                return Err(e);
            }
        }

        let mut output = vec![result.status_line()];
        println!("{}", output[0]);

        if let (Some(dumper), Some(bounds)) = (&self.dumper, bounds) {
            if trigger.previous() != result.state {
                let frame = frames
                    .iter()
                    .find(|f| Some(f.index) == result.display_index);
                if let Some(frame) = frame {
                    if let Err(e) = dumper.dump(
                        chrono::Local::now(),
                        result.state,
                        frame,
                        &bounds,
                        self.detector.classifier().profile(),
                    ) {
                        warn!("크롭 덤프 실패: {e}");
                    }
                }
            }
        }

        let mut clicked = None;
        if trigger.observe(result.state) {
            if let Some(target) = result.click_target {
                match self.dispatcher.click_and_restore(target).await {
                    Ok((x, y)) => {
                        let line = click_line(x, y, self.config.elevated);
                        println!("{line}");
                        output.push(line);
                        clicked = Some((x, y));
                    }
                    Err(e) => warn!("클릭 실패: {e}"),
                }
            }
        } else if result.state == ApplicationState::Combat {
            debug!("전투 지속, 클릭 생략");
        }

        Ok(CycleOutcome {
            result,
            clicked,
            output,
        })
    }
}

/// 클릭 출력 줄
pub fn click_line(x: i32, y: i32, elevated: bool) -> String {
    if elevated {
        format!("Click {x}, {y}")
    } else {
        format!("Click {x}, {y} {PRIVILEGE_HINT}")
    }
}
