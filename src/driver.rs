//! Frame loop
//!
//! One iteration: measure and clamp delta-time, drain input, tick once,
//! present, then optionally sleep out the rest of the frame. The driver owns
//! no gameplay state of its own.

use std::time::Duration;

use crate::game::Game;
use crate::highscores::HighScoreStore;
use crate::platform::{Clock, InputSource, InputState, RawEvent};
use crate::renderer::{FrameView, Renderer};
use crate::settings::Settings;
use crate::sim::autopilot;

/// Turns clock readings into clamped frame deltas
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_ms: Option<u64>,
    /// Largest delta handed out (seconds)
    max_dt: f32,
}

impl FrameTimer {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous call, capped at `max_dt`; zero on the first call
    pub fn delta(&mut self, now_ms: u64) -> f32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        let dt = now_ms.saturating_sub(last) as f32 / 1000.0;
        if dt > self.max_dt {
            log::debug!("Frame took {:.3}s, clamping to {:.3}s", dt, self.max_dt);
            self.max_dt
        } else {
            dt
        }
    }
}

/// Whether the loop keeps going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Why [`Driver::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    FrameLimit,
}

pub struct Driver<S, C, I, R>
where
    S: HighScoreStore,
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    game: Game<S>,
    clock: C,
    source: I,
    renderer: R,
    input: InputState,
    timer: FrameTimer,
    events: Vec<RawEvent>,
    frame_time: Duration,
    pacing: bool,
    autopilot: bool,
    frames: u64,
}

impl<S, C, I, R> Driver<S, C, I, R>
where
    S: HighScoreStore,
    C: Clock,
    I: InputSource,
    R: Renderer,
{
    pub fn new(game: Game<S>, clock: C, source: I, renderer: R, settings: &Settings) -> Self {
        Self {
            game,
            clock,
            source,
            renderer,
            input: InputState::new(),
            timer: FrameTimer::new(settings.max_frame_dt),
            events: Vec::new(),
            frame_time: Duration::from_secs_f32(settings.frame_time()),
            pacing: settings.frame_pacing,
            autopilot: false,
            frames: 0,
        }
    }

    /// Let the computer steer (and restart) instead of the held keys
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    /// Run a single iteration of the loop
    pub fn run_frame(&mut self) -> FrameStatus {
        let frame_start = self.clock.now_ms();
        let dt = self.timer.delta(frame_start);

        self.events.clear();
        self.source.poll(&mut self.events);
        for event in self.events.drain(..) {
            self.input.handle(event);
        }

        let mut input = self.input.take_frame();
        if self.autopilot {
            autopilot::steer(self.game.state(), &mut input);
        }

        let outcome = self.game.update(&input, dt, frame_start);
        self.renderer.present(&FrameView::new(self.game.state()));
        self.frames += 1;

        if outcome.quit {
            return FrameStatus::Quit;
        }

        if self.pacing {
            let spent = Duration::from_millis(self.clock.now_ms().saturating_sub(frame_start));
            if let Some(rest) = self.frame_time.checked_sub(spent) {
                self.clock.sleep(rest);
            }
        }

        FrameStatus::Continue
    }

    /// Loop until quit, or until `frame_limit` frames have run
    pub fn run(&mut self, frame_limit: Option<u64>) -> StopReason {
        loop {
            if frame_limit.is_some_and(|limit| self.frames >= limit) {
                log::info!("Frame limit reached after {} frames", self.frames);
                return StopReason::FrameLimit;
            }
            if self.run_frame() == FrameStatus::Quit {
                log::info!("Quit requested after {} frames", self.frames);
                return StopReason::Quit;
            }
        }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<S> {
        &mut self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down, returning the game for inspection
    pub fn into_game(self) -> Game<S> {
        self.game
    }
}
