//! Warmth-meter balancing engine.
use serde::{Deserialize, Serialize};

use super::TickClock;
use crate::config::ConfigError;

pub const PROGRESS_MAX: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    pub tick_ms: u32,
    pub start_warmth: f32,
    pub decay: f32,
    pub hug_boost: f32,
    pub max_warmth: f32,
    pub band_low: f32,
    pub band_high: f32,
    pub gain: f32,
    pub overshoot_loss: f32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            start_warmth: 30.0,
            decay: 0.4,
            hug_boost: 12.0,
            max_warmth: 100.0,
            band_low: 65.0,
            band_high: 95.0,
            gain: 0.4,
            overshoot_loss: 0.2,
        }
    }
}

impl MeterConfig {
    /// # Errors
    ///
    /// Returns an error when the band or start warmth falls outside the meter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "meter.tick_ms",
            });
        }
        if self.gain <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "meter.gain",
            });
        }
        if self.band_low >= self.band_high {
            return Err(ConfigError::InvertedBand {
                field: "meter.band",
                low: self.band_low,
                high: self.band_high,
            });
        }
        ConfigError::check_range("meter.band_high", self.band_high, 0.0, self.max_warmth)?;
        ConfigError::check_range("meter.start_warmth", self.start_warmth, 0.0, self.max_warmth)
    }
}

/// Where warmth sits relative to the target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Cold,
    Cozy,
    TooTight,
}

#[derive(Debug, Clone)]
pub struct MeterGame {
    cfg: MeterConfig,
    clock: TickClock,
    warmth: f32,
    progress: f32,
}

impl MeterGame {
    #[must_use]
    pub const fn new(cfg: MeterConfig) -> Self {
        let clock = TickClock::new(cfg.tick_ms);
        let warmth = cfg.start_warmth;
        Self {
            cfg,
            clock,
            warmth,
            progress: 0.0,
        }
    }

    #[must_use]
    pub const fn warmth(&self) -> f32 {
        self.warmth
    }

    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub const fn band(&self) -> (f32, f32) {
        (self.cfg.band_low, self.cfg.band_high)
    }

    #[must_use]
    pub fn mood(&self) -> Mood {
        if self.warmth >= self.cfg.band_high {
            Mood::TooTight
        } else if self.warmth > self.cfg.band_low {
            Mood::Cozy
        } else {
            Mood::Cold
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    pub fn hug(&mut self) -> bool {
        if self.is_won() {
            return false;
        }
        self.warmth = (self.warmth + self.cfg.hug_boost).min(self.cfg.max_warmth);
        true
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        for _ in 0..self.clock.accumulate(elapsed_ms) {
            if self.is_won() {
                break;
            }
            self.step();
        }
    }

    /// One decay tick, then progress moves by mood.
    pub fn step(&mut self) {
        self.warmth = (self.warmth - self.cfg.decay).max(0.0);
        self.progress = match self.mood() {
            Mood::Cozy => (self.progress + self.cfg.gain).min(PROGRESS_MAX),
            Mood::TooTight => (self.progress - self.cfg.overshoot_loss).max(0.0),
            Mood::Cold => self.progress,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmth_decays_to_zero_and_stays() {
        let mut game = MeterGame::new(MeterConfig::default());
        game.advance(30 * 200);
        assert!(game.warmth().abs() < f32::EPSILON);
        assert_eq!(game.mood(), Mood::Cold);
        assert!(game.progress().abs() < f32::EPSILON);
    }

    #[test]
    fn hugs_are_capped_at_max_warmth() {
        let mut game = MeterGame::new(MeterConfig::default());
        for _ in 0..20 {
            game.hug();
        }
        assert!((game.warmth() - 100.0).abs() < f32::EPSILON);
        assert_eq!(game.mood(), Mood::TooTight);
    }

    #[test]
    fn overshoot_drains_progress() {
        let mut game = MeterGame::new(MeterConfig::default());
        // Three hugs take warmth from 30 to 66: cozy.
        for _ in 0..3 {
            game.hug();
        }
        game.step();
        assert!(game.progress() > 0.0);
        let before = game.progress();
        for _ in 0..5 {
            game.hug();
        }
        game.step();
        assert!(game.progress() < before);
    }

    #[test]
    fn steady_hugging_wins_exactly_at_max() {
        let mut game = MeterGame::new(MeterConfig::default());
        let mut ticks = 0_u32;
        while !game.is_won() && ticks < 100_000 {
            if game.warmth() < 75.0 {
                game.hug();
            }
            game.advance(30);
            ticks += 1;
            assert!((0.0..=PROGRESS_MAX).contains(&game.progress()));
        }
        assert!(game.is_won());
        assert!((game.progress() - PROGRESS_MAX).abs() < f32::EPSILON);
        assert!(!game.hug());
        let warmth = game.warmth();
        game.advance(3_000);
        assert!((game.warmth() - warmth).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_stays_bounded_under_erratic_input() {
        let mut game = MeterGame::new(MeterConfig::default());
        for tick in 0..50_000_u32 {
            if tick % 7 == 0 || tick % 11 == 0 {
                game.hug();
            }
            game.advance(30);
            assert!((0.0..=PROGRESS_MAX).contains(&game.progress()));
            assert!((0.0..=100.0).contains(&game.warmth()));
        }
    }
}
