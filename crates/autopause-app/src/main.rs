//! # autopause-app
//!
//! AutoPause 실행 파일 진입점.
//! 설정 로드, 어댑터 DI 와이어링, 감지 루프 실행, 라이프사이클 관리.

mod lifecycle;
mod scheduler;

use anyhow::{anyhow, Result};
use autopause_automation::dispatcher::ClickDispatcher;
use autopause_automation::input_driver::{create_platform_input_driver, NoOpInputDriver};
use autopause_core::config::AppConfig;
use autopause_core::config_manager::ConfigManager;
use autopause_core::models::landmark::DetectionProfile;
use autopause_core::ports::input_driver::InputDriver;
use autopause_monitor::privilege;
use autopause_monitor::window::XcapWindowLocator;
use autopause_vision::capture::XcapScreenCapturer;
use autopause_vision::classifier::FrameClassifier;
use autopause_vision::detector::StateDetector;
use autopause_vision::dump::CropDumper;
use autopause_vision::templates::TemplateSet;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::lifecycle::LifecycleManager;
use crate::scheduler::{PauseScheduler, SchedulerConfig};

/// 게임 자동 일시정지 도우미
///
/// 대상 창의 화면을 주기적으로 분석해 전투가 시작되면 일시정지 버튼을 클릭한다.
#[derive(Parser, Debug)]
#[command(name = "autopause")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 초당 감지 횟수
    #[arg(long)]
    fps: Option<u32>,

    /// 대상 창 제목 정규식
    #[arg(long, short = 't')]
    title: Option<String>,

    /// 템플릿 이미지 디렉토리
    #[arg(long)]
    templates: Option<PathBuf>,

    /// 클릭을 실제로 보내지 않고 로그만 남김
    #[arg(long)]
    dry_run: bool,

    /// 상태가 바뀔 때 랜드마크 영역 크롭을 저장할 디렉토리
    #[arg(long)]
    dump_dir: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// CLI 인자로 설정 덮어쓰기
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(fps) = args.fps {
        config.scheduler.fps = fps;
    }
    if let Some(ref title) = args.title {
        config.target.title_pattern = title.clone();
    }
    if let Some(ref dir) = args.templates {
        config.templates.dir = dir.clone();
    }
    if let Some(ref dir) = args.dump_dir {
        config.debug.dump_dir = Some(dir.clone());
    }
}

/// 모든 워크스페이스 crate에 같은 레벨을 적용하는 필터
fn log_filter(level: &str) -> String {
    [
        "autopause",
        "autopause_app",
        "autopause_core",
        "autopause_vision",
        "autopause_monitor",
        "autopause_automation",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let manager = match args.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .map_err(|e| anyhow!("설정 로드 실패: {e}"))?;
    info!("설정 파일: {}", manager.config_path().display());

    let mut config = manager.get();
    apply_overrides(&mut config, args);
    config
        .validate()
        .map_err(|e| anyhow!("설정 검증 실패: {e}"))?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(&args.log_level))),
        )
        .init();

    info!("AutoPause 시작");

    let config = load_config(&args)?;
    autopause_monitor::init_platform();

    // ── 어댑터 생성 (DI 와이어링) ──

    let templates = TemplateSet::load_dir(&config.templates.dir)
        .map_err(|e| anyhow!("템플릿 로드 실패: {e}"))?;
    let classifier = FrameClassifier::new(DetectionProfile::default(), templates);

    let locator = XcapWindowLocator::new(&config.target.title_pattern)
        .map_err(|e| anyhow!("창 탐색기 생성 실패: {e}"))?;
    let detector = StateDetector::new(
        Arc::new(locator),
        Arc::new(XcapScreenCapturer::new()),
        classifier,
    );

    let input_driver: Arc<dyn InputDriver> = if args.dry_run {
        info!("드라이런 모드: 클릭을 보내지 않음");
        Arc::new(NoOpInputDriver)
    } else {
        Arc::from(create_platform_input_driver())
    };
    let dispatcher = ClickDispatcher::new(input_driver, config.click.hold());

    let elevated = privilege::is_elevated();
    if !elevated {
        warn!("관리자 권한 없이 실행 중: 대상 창이 관리자 권한이면 클릭이 무시됨");
    }

    let mut sched = PauseScheduler::new(
        SchedulerConfig {
            period: config.scheduler.period(),
            halt_on_capture_failure: config.scheduler.halt_on_capture_failure,
            elevated,
        },
        detector,
        dispatcher,
    );
    if let Some(dir) = config.debug.dump_dir.clone() {
        let dumper = CropDumper::new(dir).map_err(|e| anyhow!("덤프 디렉토리 준비 실패: {e}"))?;
        sched = sched.with_dumper(dumper);
    }

    // ── 감지 루프 ──

    let lifecycle = LifecycleManager::new();
    let shutdown_rx = lifecycle.subscribe();
    let mut loop_task = tokio::spawn(async move { sched.run(shutdown_rx).await });

    info!(
        "대상 창 대기 중: /{}/ (Ctrl+C로 종료)",
        config.target.title_pattern
    );

    let outcome = tokio::select! {
        _ = lifecycle.wait_for_signal() => (&mut loop_task).await,
        outcome = &mut loop_task => outcome,
    };

    match outcome {
        Ok(Ok(())) => {
            info!("AutoPause 종료");
            Ok(())
        }
        Ok(Err(e)) => {
            error!("감지 루프 중단: {e}");
            Err(anyhow!("감지 루프 중단: {e}"))
        }
        Err(e) => Err(anyhow!("감지 루프 태스크 실패: {e}")),
    }
}
