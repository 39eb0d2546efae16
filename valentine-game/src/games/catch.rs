//! Catch-the-falling-roses engine.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::TickClock;
use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchConfig {
    pub tick_ms: u32,
    pub target_score: u32,
    pub thorn_chance: f32,
    pub spawn_x_min: f32,
    pub spawn_x_span: f32,
    pub spawn_y: f32,
    pub rose_speed: f32,
    pub thorn_speed: f32,
    pub despawn_y: f32,
    pub band_top: f32,
    pub band_bottom: f32,
    pub tolerance: f32,
    pub catcher_min: f32,
    pub catcher_max: f32,
    pub rose_points: u32,
    pub thorn_penalty: u32,
}

impl Default for CatchConfig {
    fn default() -> Self {
        Self {
            tick_ms: 400,
            target_score: 10,
            thorn_chance: 0.3,
            spawn_x_min: 5.0,
            spawn_x_span: 90.0,
            spawn_y: -10.0,
            rose_speed: 1.5,
            thorn_speed: 2.0,
            despawn_y: 110.0,
            band_top: 85.0,
            band_bottom: 95.0,
            tolerance: 10.0,
            catcher_min: 5.0,
            catcher_max: 95.0,
            rose_points: 1,
            thorn_penalty: 2,
        }
    }
}

impl CatchConfig {
    /// # Errors
    ///
    /// Returns an error when a period, target, or probability is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "catch.tick_ms",
            });
        }
        if self.target_score == 0 {
            return Err(ConfigError::NonPositive {
                field: "catch.target_score",
            });
        }
        ConfigError::check_range("catch.thorn_chance", self.thorn_chance, 0.0, 1.0)?;
        if self.band_top >= self.band_bottom {
            return Err(ConfigError::InvertedBand {
                field: "catch.band",
                low: self.band_top,
                high: self.band_bottom,
            });
        }
        if self.catcher_min > self.catcher_max {
            return Err(ConfigError::InvertedBand {
                field: "catch.catcher",
                low: self.catcher_min,
                high: self.catcher_max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Rose,
    Thorn,
}

/// An item in flight; positions are percentages of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
}

#[derive(Debug, Clone)]
pub struct CatchGame {
    cfg: CatchConfig,
    rng: ChaCha20Rng,
    clock: TickClock,
    items: Vec<FallingItem>,
    catcher_x: f32,
    score: u32,
    next_id: u32,
    last_catch: Option<ItemKind>,
}

impl CatchGame {
    #[must_use]
    pub fn new(cfg: CatchConfig, seed: u64) -> Self {
        let clock = TickClock::new(cfg.tick_ms);
        let catcher_x = f32::midpoint(cfg.catcher_min, cfg.catcher_max);
        Self {
            cfg,
            rng: ChaCha20Rng::seed_from_u64(seed),
            clock,
            items: Vec::new(),
            catcher_x,
            score: 0,
            next_id: 0,
            last_catch: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FallingItem] {
        &self.items
    }

    #[must_use]
    pub const fn catcher_x(&self) -> f32 {
        self.catcher_x
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.cfg.target_score
    }

    /// Kind of the most recent catch, for feedback flashes.
    #[must_use]
    pub const fn last_catch(&self) -> Option<ItemKind> {
        self.last_catch
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.score >= self.cfg.target_score
    }

    /// Move the catcher to `x` percent, clamped to the field. Returns false
    /// once the game is won or for a non-finite position.
    pub fn move_catcher(&mut self, x: f32) -> bool {
        if self.is_won() || !x.is_finite() {
            return false;
        }
        self.catcher_x = x.clamp(self.cfg.catcher_min, self.cfg.catcher_max);
        self.resolve_catch();
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

    /// One fall tick: spawn, move, cull, then check the catch band.
    pub fn step(&mut self) {
        self.spawn();
        let (rose_speed, thorn_speed) = (self.cfg.rose_speed, self.cfg.thorn_speed);
        for item in &mut self.items {
            item.y += match item.kind {
                ItemKind::Rose => rose_speed,
                ItemKind::Thorn => thorn_speed,
            };
        }
        let despawn_y = self.cfg.despawn_y;
        self.items.retain(|item| item.y < despawn_y);
        self.resolve_catch();
    }

    /// Drop an item of a chosen kind at a chosen column; used by scripted runs.
    pub fn spawn_at(&mut self, x: f32, kind: ItemKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(FallingItem {
            id,
            x,
            y: self.cfg.spawn_y,
            kind,
        });
        id
    }

    fn spawn(&mut self) {
        let kind = if self.rng.gen_bool(f64::from(self.cfg.thorn_chance)) {
            ItemKind::Thorn
        } else {
            ItemKind::Rose
        };
        let x = self.rng.gen_range(0.0..1.0_f32) * self.cfg.spawn_x_span + self.cfg.spawn_x_min;
        self.spawn_at(x, kind);
    }

    // Only the first qualifying item is taken per check; the rest get their
    // chance on the next tick or move.
    fn resolve_catch(&mut self) {
        let cfg = &self.cfg;
        let catcher_x = self.catcher_x;
        let Some(pos) = self.items.iter().position(|item| {
            item.y > cfg.band_top
                && item.y < cfg.band_bottom
                && (item.x - catcher_x).abs() < cfg.tolerance
        }) else {
            return;
        };
        let caught = self.items.remove(pos);
        self.score = match caught.kind {
            ItemKind::Rose => (self.score + self.cfg.rose_points).min(self.cfg.target_score),
            ItemKind::Thorn => self.score.saturating_sub(self.cfg.thorn_penalty),
        };
        self.last_catch = Some(caught.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> CatchGame {
        CatchGame::new(CatchConfig::default(), 7)
    }

    // Parks the catcher away from `x`, then places a fresh item inside the band.
    fn drop_into_band(game: &mut CatchGame, x: f32, kind: ItemKind) {
        let far = if x > 50.0 { 5.0 } else { 95.0 };
        game.move_catcher(far);
        let id = game.spawn_at(x, kind);
        if let Some(item) = game.items.iter_mut().find(|item| item.id == id) {
            item.y = 90.0;
        }
    }

    #[test]
    fn catching_a_rose_scores_one() {
        let mut g = game();
        drop_into_band(&mut g, 40.0, ItemKind::Rose);
        g.move_catcher(42.0);
        assert_eq!(g.score(), 1);
        assert_eq!(g.last_catch(), Some(ItemKind::Rose));
        assert!(g.items().iter().all(|item| item.y < 85.0 || item.y > 95.0));
    }

    #[test]
    fn thorn_never_drives_score_below_zero() {
        let mut g = game();
        drop_into_band(&mut g, 60.0, ItemKind::Thorn);
        g.move_catcher(60.0);
        assert_eq!(g.score(), 0);
        assert_eq!(g.last_catch(), Some(ItemKind::Thorn));
    }

    #[test]
    fn thorn_costs_more_than_a_rose_gives() {
        let mut g = game();
        for _ in 0..3 {
            drop_into_band(&mut g, 30.0, ItemKind::Rose);
            g.move_catcher(30.0);
        }
        assert_eq!(g.score(), 3);
        drop_into_band(&mut g, 70.0, ItemKind::Thorn);
        g.move_catcher(70.0);
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn reaching_target_wins_and_caps_score() {
        let mut g = game();
        for _ in 0..12 {
            drop_into_band(&mut g, 50.0, ItemKind::Rose);
            g.move_catcher(50.0);
        }
        assert_eq!(g.score(), 10);
        assert!(g.is_won());
        assert!(!g.move_catcher(20.0));
    }

    #[test]
    fn non_finite_moves_are_rejected() {
        let mut g = game();
        let before = g.catcher_x();
        assert!(!g.move_catcher(f32::NAN));
        assert!(!g.move_catcher(f32::INFINITY));
        assert!((g.catcher_x() - before).abs() < f32::EPSILON);
        assert!(g.move_catcher(30.0));
    }

    #[test]
    fn catcher_is_clamped_to_field() {
        let mut g = game();
        g.move_catcher(-40.0);
        assert!((g.catcher_x() - 5.0).abs() < f32::EPSILON);
        g.move_catcher(400.0);
        assert!((g.catcher_x() - 95.0).abs() < f32::EPSILON);
    }

    #[test]
    fn items_fall_at_kind_speed_and_leave_the_field() {
        let mut g = game();
        g.move_catcher(95.0);
        let rose = g.spawn_at(5.0, ItemKind::Rose);
        let thorn = g.spawn_at(6.0, ItemKind::Thorn);
        g.step();
        let y_of = |g: &CatchGame, id: u32| g.items().iter().find(|i| i.id == id).map(|i| i.y);
        assert_eq!(y_of(&g, rose), Some(-8.5));
        assert_eq!(y_of(&g, thorn), Some(-8.0));
        for _ in 0..200 {
            g.step();
        }
        assert!(g.items().iter().all(|item| item.y < 110.0));
        assert!(y_of(&g, rose).is_none());
    }

    #[test]
    fn score_stays_in_bounds_over_long_runs() {
        let mut g = CatchGame::new(CatchConfig::default(), 99);
        for tick in 0..5_000_u32 {
            let x = f32::from(u16::try_from(tick * 37 % 100).unwrap());
            g.move_catcher(x);
            g.advance(400);
            assert!(g.score() <= 10);
        }
    }

    #[test]
    fn advance_runs_whole_ticks_only() {
        let mut g = game();
        g.advance(399);
        assert!(g.items().is_empty());
        g.advance(1);
        assert_eq!(g.items().len(), 1);
    }
}
