//! Tap-the-fleeting-hearts engine.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::TickClock;
use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    pub tick_ms: u32,
    pub spawn_every_ms: u32,
    pub lifetime_ms: u32,
    pub target_hits: u32,
    /// Spawn positions are percentages in `[spawn_min, spawn_min + spawn_span)`.
    pub spawn_min: f32,
    pub spawn_span: f32,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            spawn_every_ms: 700,
            lifetime_ms: 1_200,
            target_hits: 10,
            spawn_min: 10.0,
            spawn_span: 80.0,
        }
    }
}

impl ReactionConfig {
    /// # Errors
    ///
    /// Returns an error for zero timings or a spawn area outside the field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("reaction.tick_ms", self.tick_ms),
            ("reaction.spawn_every_ms", self.spawn_every_ms),
            ("reaction.lifetime_ms", self.lifetime_ms),
            ("reaction.target_hits", self.target_hits),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        ConfigError::check_range("reaction.spawn_min", self.spawn_min, 0.0, 100.0)?;
        ConfigError::check_range(
            "reaction.spawn_span",
            self.spawn_span,
            0.0,
            100.0 - self.spawn_min,
        )
    }
}

/// A heart waiting to be tapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub age_ms: u32,
}

#[derive(Debug, Clone)]
pub struct ReactionGame {
    cfg: ReactionConfig,
    rng: ChaCha20Rng,
    clock: TickClock,
    targets: Vec<Target>,
    hits: u32,
    since_spawn_ms: u32,
    next_id: u32,
}

impl ReactionGame {
    #[must_use]
    pub fn new(cfg: ReactionConfig, seed: u64) -> Self {
        let clock = TickClock::new(cfg.tick_ms);
        Self {
            cfg,
            rng: ChaCha20Rng::seed_from_u64(seed),
            clock,
            targets: Vec::new(),
            hits: 0,
            since_spawn_ms: 0,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub const fn hits(&self) -> u32 {
        self.hits
    }

    #[must_use]
    pub const fn target_hits(&self) -> u32 {
        self.cfg.target_hits
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.hits >= self.cfg.target_hits
    }

    /// Tap target `id`. Unknown or expired ids are ignored.
    pub fn hit(&mut self, id: u32) -> bool {
        if self.is_won() {
            return false;
        }
        let Some(pos) = self.targets.iter().position(|t| t.id == id) else {
            return false;
        };
        self.targets.remove(pos);
        self.hits += 1;
        if self.is_won() {
            self.targets.clear();
        }
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

    /// Age and expire targets, then spawn when the spawn period has elapsed.
    pub fn step(&mut self) {
        let dt = self.cfg.tick_ms;
        let lifetime = self.cfg.lifetime_ms;
        for target in &mut self.targets {
            target.age_ms = target.age_ms.saturating_add(dt);
        }
        self.targets.retain(|t| t.age_ms < lifetime);

        self.since_spawn_ms += dt;
        if self.since_spawn_ms >= self.cfg.spawn_every_ms {
            self.since_spawn_ms -= self.cfg.spawn_every_ms;
            let x = self.rng.gen_range(0.0..1.0_f32) * self.cfg.spawn_span + self.cfg.spawn_min;
            let y = self.rng.gen_range(0.0..1.0_f32) * self.cfg.spawn_span + self.cfg.spawn_min;
            self.spawn_at(x, y);
        }
    }

    /// Place a target directly; returns its id.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.targets.push(Target { id, x, y, age_ms: 0 });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_spawn_on_schedule_inside_the_field() {
        let mut game = ReactionGame::new(ReactionConfig::default(), 5);
        game.advance(600);
        assert!(game.targets().is_empty());
        game.advance(100);
        assert_eq!(game.targets().len(), 1);
        for _ in 0..200 {
            game.advance(100);
            for t in game.targets() {
                assert!((10.0..=90.0).contains(&t.x), "x {}", t.x);
                assert!((10.0..=90.0).contains(&t.y), "y {}", t.y);
            }
        }
    }

    #[test]
    fn untouched_targets_expire() {
        let mut game = ReactionGame::new(ReactionConfig::default(), 1);
        let id = game.spawn_at(50.0, 50.0);
        game.advance(1_100);
        assert!(game.targets().iter().any(|t| t.id == id));
        game.advance(100);
        assert!(game.targets().iter().all(|t| t.id != id));
        assert!(!game.hit(id));
        assert_eq!(game.hits(), 0);
    }

    #[test]
    fn ten_hits_win() {
        let mut game = ReactionGame::new(ReactionConfig::default(), 2);
        for _ in 0..9 {
            let id = game.spawn_at(20.0, 20.0);
            assert!(game.hit(id));
        }
        assert!(!game.is_won());
        let last = game.spawn_at(30.0, 30.0);
        assert!(game.hit(last));
        assert!(game.is_won());
        let extra = game.spawn_at(40.0, 40.0);
        assert!(!game.hit(extra));
        assert_eq!(game.hits(), 10);
    }
}
