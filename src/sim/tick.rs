//! Per-frame simulation step and phase transitions
//!
//! Frame ordering while playing is a contract, not an accident:
//! 1. elapsed time
//! 2. time score
//! 3. player movement (clamped)
//! 4. spawn check, THEN advance every obstacle (a fresh spawn moves on its
//!    first frame, exactly like the rest of the pool)
//! 5. collision check, game over and high score

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::obstacles::SpawnOutcome;
use super::state::{GamePhase, GameState};

/// Input for a single tick
///
/// `move_left`/`move_right` are held intents; the rest are one-shot actions
/// that must already be free of key repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Start / restart
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    pub quit: bool,
}

impl TickInput {
    /// Drop the one-shot actions, keep held intents
    pub fn clear_actions(&mut self) {
        self.start = false;
        self.pause = false;
        self.quit = false;
    }
}

/// Discrete actions that can change phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Start,
    PauseToggle,
    Quit,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Start, Action::PauseToggle, Action::Quit];
}

/// Side effect attached to a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Wipe score, time, player and obstacles for a new run
    ResetRun,
    /// Stop the driver loop
    Halt,
}

/// Transition table: `(phase, action) -> (next phase, effect)`
///
/// `None` means the action is ignored in that phase.
pub fn transition(phase: GamePhase, action: Action) -> Option<(GamePhase, Effect)> {
    use GamePhase::*;
    match (phase, action) {
        (_, Action::Quit) => Some((phase, Effect::Halt)),
        (Menu | GameOver, Action::Start) => Some((Playing, Effect::ResetRun)),
        (Playing, Action::PauseToggle) => Some((Paused, Effect::None)),
        (Paused, Action::PauseToggle) => Some((Playing, Effect::None)),
        (Playing | Paused, Action::Start) => None,
        (Menu | GameOver, Action::PauseToggle) => None,
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Spawned { slot: usize },
    Dodged { slot: usize },
    Collided { slot: usize },
    /// The run ended above the previous best; the value must be persisted
    NewHighScore(u32),
}

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Quit was requested; the driver should stop after this frame
    pub quit: bool,
}

impl TickOutcome {
    pub fn new_high_score(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::NewHighScore(score) => Some(*score),
            _ => None,
        })
    }
}

/// Apply one action to the state, returning whether anything changed
pub fn apply_action(state: &mut GameState, action: Action, now_ms: u64, outcome: &mut TickOutcome) -> bool {
    let Some((next, effect)) = transition(state.phase, action) else {
        return false;
    };

    match effect {
        Effect::Halt => {
            outcome.quit = true;
            return true;
        }
        Effect::ResetRun => state.reset_run(now_ms),
        Effect::None => {}
    }

    if next != state.phase {
        log::debug!("Phase {:?} -> {:?}", state.phase, next);
        outcome.events.push(GameEvent::PhaseChanged {
            from: state.phase,
            to: next,
        });
        state.phase = next;
    }
    true
}

/// Advance the game by one frame of `dt` seconds at clock reading `now_ms`
///
/// A frame whose input changes phase only applies the transition.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if input.quit && apply_action(state, Action::Quit, now_ms, &mut outcome) {
        return outcome;
    }

    let mut changed = false;
    if input.start {
        changed |= apply_action(state, Action::Start, now_ms, &mut outcome);
    }
    if input.pause {
        changed |= apply_action(state, Action::PauseToggle, now_ms, &mut outcome);
    }
    if changed {
        return outcome;
    }

    if state.phase != GamePhase::Playing {
        return outcome;
    }

    let dt = dt.max(0.0);

    state.elapsed += dt;
    state.add_time_score(dt);

    let screen_width = state.tuning.screen_width;
    state
        .player
        .apply_movement(input.move_left, input.move_right, dt, screen_width);

    // Spawn before advancing
    if let SpawnOutcome::Spawned(slot) =
        state
            .obstacles
            .try_spawn(now_ms, state.elapsed, &state.tuning, &mut state.rng)
    {
        outcome.events.push(GameEvent::Spawned { slot });
    }

    let retired = state.obstacles.update(dt, &state.tuning);
    state.score = state.score.saturating_add(retired.bonus);
    outcome
        .events
        .extend(retired.slots.into_iter().map(|slot| GameEvent::Dodged { slot }));

    if let Some(slot) = first_collision(&state.player, &state.obstacles) {
        outcome.events.push(GameEvent::Collided { slot });
        outcome.events.push(GameEvent::PhaseChanged {
            from: GamePhase::Playing,
            to: GamePhase::GameOver,
        });
        state.phase = GamePhase::GameOver;
        log::info!("Game over. Score: {}", state.score);

        if state.beats_high_score() {
            state.high_score = state.score;
            outcome.events.push(GameEvent::NewHighScore(state.score));
            log::info!("New high score: {}", state.high_score);
        }
    }

    outcome
}
