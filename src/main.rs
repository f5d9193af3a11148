//! Endless Dodge entry point
//!
//! Without a window backend the native binary runs the self-playing demo:
//! the autopilot plays for `demo_seconds`, frames are built by the headless
//! renderer, and the best score is persisted like in a normal session.

use std::process::ExitCode;

use thiserror::Error;

use endless_dodge::driver::{Driver, StopReason};
use endless_dodge::platform::{ScriptedInput, SystemClock};
use endless_dodge::renderer::HeadlessRenderer;
use endless_dodge::settings::SettingsError;
use endless_dodge::{FileHighScoreStore, Game, Settings};

#[derive(Debug, Error)]
enum AppError {
    #[error("unknown argument `{0}` (expected --write-config or --no-pacing)")]
    Usage(String),
    #[error("failed to write settings: {0}")]
    WriteSettings(#[from] SettingsError),
}

struct Options {
    write_config: bool,
    no_pacing: bool,
}

fn parse_args() -> Result<Options, AppError> {
    let mut options = Options {
        write_config: false,
        no_pacing: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--write-config" => options.write_config = true,
            "--no-pacing" => options.no_pacing = true,
            _ => return Err(AppError::Usage(arg)),
        }
    }
    Ok(options)
}

fn run() -> Result<(), AppError> {
    let options = parse_args()?;

    let config_path = Settings::default_path();
    let mut settings = Settings::load(&config_path);
    if options.no_pacing {
        settings.frame_pacing = false;
    }
    if options.write_config {
        settings.save(&config_path)?;
        return Ok(());
    }

    let store = FileHighScoreStore::new(settings.highscore_path.clone());
    let game = Game::from_settings(&settings, store);

    let frame_limit = (settings.demo_seconds * settings.target_fps as f32).ceil() as u64;
    let mut driver = Driver::new(
        game,
        SystemClock::new(),
        ScriptedInput::default(),
        HeadlessRenderer::new(),
        &settings,
    )
    .with_autopilot(true);

    log::info!("Running demo for {:.1}s ({} frames)", settings.demo_seconds, frame_limit);
    let reason = driver.run(Some(frame_limit));

    let game = driver.into_game();
    let state = game.state();
    log::info!(
        "Demo finished ({}): {} runs, last score {}, high score {}",
        match reason {
            StopReason::Quit => "quit",
            StopReason::FrameLimit => "time up",
        },
        state.runs_started,
        state.score,
        state.high_score
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Endless Dodge (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("endless-dodge: {e}");
            ExitCode::FAILURE
        }
    }
}
