//! A running game: simulation context plus its high score store
//!
//! The simulation reports a new best score as an event; this layer is the
//! only place that talks to storage.

use crate::highscores::HighScoreStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameRng, GameState, TickInput, TickOutcome, tick};
use crate::tuning::Tuning;

pub struct Game<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    /// Load the best score and sit in the menu
    pub fn new(tuning: Tuning, rng: GameRng, mut store: S) -> Self {
        let high_score = store.load_high_score();
        log::info!("Game initialized. High score: {}", high_score);
        Self {
            state: GameState::new(tuning, rng, high_score),
            store,
        }
    }

    /// Build from settings; the RNG is seeded from the configured seed or the clock
    pub fn from_settings(settings: &Settings, store: S) -> Self {
        let rng = match settings.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_time(),
        };
        log::debug!("RNG seed: {}", rng.seed());
        Self::new(settings.tuning.clone(), rng, store)
    }

    /// Advance one frame and persist a new best score if the run just beat it
    pub fn update(&mut self, input: &TickInput, dt: f32, now_ms: u64) -> TickOutcome {
        let outcome = tick(&mut self.state, input, dt, now_ms);

        for event in &outcome.events {
            if let GameEvent::NewHighScore(score) = event {
                self.store.save_high_score(*score);
            }
        }

        outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access, for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, e.g. to reopen it in a fresh game
    pub fn into_store(self) -> S {
        self.store
    }
}
