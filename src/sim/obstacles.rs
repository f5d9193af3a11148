//! Fixed-capacity obstacle pool with a decaying spawn timer
//!
//! Slots never move or grow; a slot's index is the obstacle's identity for
//! as long as it stays active.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::{RandomSource, random_in_range};
use super::state::Obstacle;
use crate::tuning::Tuning;

/// Result of a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Interval has not elapsed yet
    NotDue,
    /// Obstacle placed in this slot
    Spawned(usize),
    /// Interval elapsed but every slot is busy
    PoolFull,
}

/// Obstacles retired by one [`ObstacleField::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retired {
    /// Slots that fell off the bottom, in slot order
    pub slots: Vec<usize>,
    /// Dodge bonus earned by those slots
    pub bonus: u32,
}

/// The obstacle pool plus its spawn timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    slots: Box<[Obstacle]>,
    /// Clock reading (ms) of the last successful spawn
    last_spawn_ms: u64,
    /// Current gap between spawns (ms)
    spawn_interval_ms: f32,
}

impl ObstacleField {
    /// Empty pool sized from the tuning
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            slots: vec![Obstacle::default(); tuning.max_obstacles].into_boxed_slice(),
            last_spawn_ms: 0,
            spawn_interval_ms: tuning.spawn_interval_base_ms,
        }
    }

    /// Clear the pool and restart the spawn timer at `now_ms`
    pub fn reset(&mut self, now_ms: u64, tuning: &Tuning) {
        for slot in self.slots.iter_mut() {
            slot.active = false;
        }
        self.spawn_interval_ms = tuning.spawn_interval_base_ms;
        self.last_spawn_ms = now_ms;
    }

    /// Spawn one obstacle if the interval has elapsed since the last spawn
    ///
    /// Speed scales with `elapsed` seconds of play. A full pool skips the
    /// spawn and leaves the timer untouched, so the next tick tries again.
    pub fn try_spawn<R: RandomSource + ?Sized>(
        &mut self,
        now_ms: u64,
        elapsed: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> SpawnOutcome {
        let since = now_ms.saturating_sub(self.last_spawn_ms) as f32;
        if since < self.spawn_interval_ms {
            return SpawnOutcome::NotDue;
        }

        let Some(idx) = self.slots.iter().position(|o| !o.active) else {
            log::debug!("Obstacle pool full ({}), skipping spawn", self.slots.len());
            return SpawnOutcome::PoolFull;
        };

        let w = random_in_range(rng, tuning.obstacle_min_width, tuning.obstacle_max_width);
        let h = tuning.obstacle_height;
        // Keep the obstacle fully inside the screen horizontally
        let max_x = (tuning.screen_width - w).max(0.0);
        let x = random_in_range(rng, 0.0, max_x);

        self.slots[idx] = Obstacle {
            pos: Vec2::new(x, -h),
            size: Vec2::new(w, h),
            speed: tuning.obstacle_speed_at(elapsed),
            active: true,
        };

        self.last_spawn_ms = now_ms;
        self.spawn_interval_ms = (self.spawn_interval_ms * tuning.spawn_interval_decay)
            .max(tuning.spawn_interval_min_ms);

        SpawnOutcome::Spawned(idx)
    }

    /// Advance every active obstacle and retire the ones below the screen
    pub fn update(&mut self, dt: f32, tuning: &Tuning) -> Retired {
        let mut retired = Retired::default();

        for (idx, o) in self.slots.iter_mut().enumerate() {
            if !o.active {
                continue;
            }

            o.pos.y += o.speed * dt;

            if o.pos.y > tuning.screen_height {
                o.active = false;
                retired.slots.push(idx);
                retired.bonus = retired.bonus.saturating_add(tuning.dodge_bonus);
            }
        }

        retired
    }

    /// Active obstacles with their slot index
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, idx: usize) -> Option<&Obstacle> {
        self.slots.get(idx)
    }

    /// Direct slot access, for scripted setups
    pub fn slot_mut(&mut self, idx: usize) -> Option<&mut Obstacle> {
        self.slots.get_mut(idx)
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.spawn_interval_ms
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }
}
