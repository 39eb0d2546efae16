//! Spot-the-odd-teddy engine with a soft countdown.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::TickClock;
use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotConfig {
    pub columns: u32,
    pub rows: u32,
    pub start_seconds: u32,
    pub tick_ms: u32,
    pub penalty_seconds: u32,
    /// Countdown values below this are shown as urgent.
    pub urgent_below: u32,
}

impl Default for SpotConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            start_seconds: 25,
            tick_ms: 1_000,
            penalty_seconds: 2,
            urgent_below: 5,
        }
    }
}

impl SpotConfig {
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    /// # Errors
    ///
    /// Returns an error for a grid smaller than two cells or a zero period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_count() < 2 {
            return Err(ConfigError::NonPositive {
                field: "spot.grid",
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "spot.tick_ms",
            });
        }
        if self.start_seconds == 0 {
            return Err(ConfigError::NonPositive {
                field: "spot.start_seconds",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SpotGame {
    cfg: SpotConfig,
    clock: TickClock,
    target: usize,
    seconds_left: u32,
    found: bool,
    misses: u32,
}

impl SpotGame {
    #[must_use]
    pub fn new(cfg: SpotConfig, seed: u64) -> Self {
        let cells = cfg.cell_count().max(1);
        let target = ChaCha20Rng::seed_from_u64(seed).gen_range(0..cells);
        Self::with_target(cfg, target)
    }

    #[must_use]
    pub const fn with_target(cfg: SpotConfig, target: usize) -> Self {
        let clock = TickClock::new(cfg.tick_ms);
        let seconds_left = cfg.start_seconds;
        Self {
            cfg,
            clock,
            target,
            seconds_left,
            found: false,
            misses: 0,
        }
    }

    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.cfg.columns
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cfg.cell_count()
    }

    #[must_use]
    pub const fn is_target(&self, index: usize) -> bool {
        index == self.target
    }

    #[must_use]
    pub const fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.seconds_left < self.cfg.urgent_below
    }

    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.misses
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.found
    }

    /// Pick a cell. `Some(true)` on the target, `Some(false)` on a miss,
    /// `None` when out of range or already solved.
    pub fn pick(&mut self, index: usize) -> Option<bool> {
        if self.found || index >= self.cell_count() {
            return None;
        }
        if index == self.target {
            self.found = true;
            Some(true)
        } else {
            self.misses += 1;
            self.seconds_left = self.seconds_left.saturating_sub(self.cfg.penalty_seconds);
            Some(false)
        }
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        for _ in 0..self.clock.accumulate(elapsed_ms) {
            if self.found {
                break;
            }
            self.step();
        }
    }

    /// One second of countdown; wraps to the start instead of expiring.
    pub fn step(&mut self) {
        self.seconds_left = if self.seconds_left <= 1 {
            self.cfg.start_seconds
        } else {
            self.seconds_left - 1
        };
    }
}
