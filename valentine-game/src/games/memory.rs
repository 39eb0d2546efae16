//! Memory-matching engine.
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Distinct symbols; each appears twice in the deck.
    pub symbols: Vec<String>,
    pub hide_delay_ms: u32,
    pub tick_ms: u32,
    pub celebration_ms: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: ["cookie", "candy", "croissant", "cake", "icecream", "coffee"]
                .into_iter()
                .map(String::from)
                .collect(),
            hide_delay_ms: 1_000,
            tick_ms: 100,
            celebration_ms: 500,
        }
    }
}

impl MemoryConfig {
    /// # Errors
    ///
    /// Returns an error for an empty symbol list or a zero tick period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::Empty {
                field: "memory.symbols",
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "memory.tick_ms",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Checking, already face up, or out of range.
    Ignored,
    /// First card of a turn turned over.
    Flipped,
    Matched,
    /// Second card differs; both hide once the delay runs out.
    Mismatched,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    cfg: MemoryConfig,
    /// Symbol index per deck position.
    deck: Vec<usize>,
    flipped: SmallVec<[usize; 2]>,
    matched: Vec<bool>,
    hide_in_ms: Option<u32>,
}

impl MemoryGame {
    #[must_use]
    pub fn new(cfg: MemoryConfig, seed: u64) -> Self {
        let mut deck: Vec<usize> = (0..cfg.symbols.len())
            .chain(0..cfg.symbols.len())
            .collect();
        deck.shuffle(&mut ChaCha20Rng::seed_from_u64(seed));
        Self::with_deck(cfg, deck)
    }

    /// Build with a fixed card order; entries index into `cfg.symbols`.
    #[must_use]
    pub fn with_deck(cfg: MemoryConfig, deck: Vec<usize>) -> Self {
        let matched = vec![false; deck.len()];
        Self {
            cfg,
            deck,
            flipped: SmallVec::new(),
            matched,
            hide_in_ms: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Symbol name shown on the face of card `index`.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.deck
            .get(index)
            .and_then(|&sym| self.cfg.symbols.get(sym))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.is_matched(index)
    }

    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count()
    }

    /// Cards turned over this turn but not yet matched.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    #[must_use]
    pub const fn is_checking(&self) -> bool {
        self.hide_in_ms.is_some()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.deck.is_empty() && self.matched_count() == self.deck.len()
    }

    pub fn reveal(&mut self, index: usize) -> RevealOutcome {
        if self.is_checking() || index >= self.deck.len() || self.is_face_up(index) {
            return RevealOutcome::Ignored;
        }
        self.flipped.push(index);
        let &[first, second] = self.flipped.as_slice() else {
            return RevealOutcome::Flipped;
        };
        if self.deck[first] == self.deck[second] {
            self.matched[first] = true;
            self.matched[second] = true;
            self.flipped.clear();
            RevealOutcome::Matched
        } else {
            self.hide_in_ms = Some(self.cfg.hide_delay_ms);
            RevealOutcome::Mismatched
        }
    }

    /// Count down the mismatch delay; both cards hide together when it ends.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let Some(remaining) = self.hide_in_ms else {
            return;
        };
        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.flipped.clear();
            self.hide_in_ms = None;
        } else {
            self.hide_in_ms = Some(remaining);
        }
    }
}
