//! Type-the-promise engine.
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    pub target: String,
    pub celebration_ms: u32,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            target: String::from("I PROMISE TO STAY"),
            celebration_ms: 500,
        }
    }
}

impl PhraseConfig {
    /// # Errors
    ///
    /// Returns an error when the target phrase is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.trim().is_empty() {
            Err(ConfigError::Empty {
                field: "phrase.target",
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhraseGame {
    target: String,
    target_len: usize,
    input: String,
}

impl PhraseGame {
    #[must_use]
    pub fn new(cfg: &PhraseConfig) -> Self {
        let target = normalize(&cfg.target);
        let target_len = target.chars().count();
        Self {
            target,
            target_len,
            input: String::new(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of characters typed so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.input.chars().count()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.input == self.target
    }

    /// Replace the input with `text`. Over-long input is rejected outright and
    /// leaves the previous input in place.
    pub fn type_text(&mut self, text: &str) -> bool {
        let normalized = normalize(text);
        if normalized.chars().count() > self.target_len {
            return false;
        }
        self.input = normalized;
        true
    }
}

fn normalize(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PhraseGame {
        PhraseGame::new(&PhraseConfig::default())
    }

    #[test]
    fn lowercase_phrase_wins() {
        let mut g = game();
        assert!(g.type_text("i promise to stay"));
        assert!(g.is_won());
    }

    #[test]
    fn partial_input_tracks_progress() {
        let mut g = game();
        assert!(g.type_text("I pro"));
        assert_eq!(g.progress(), 5);
        assert_eq!(g.input(), "I PRO");
        assert!(!g.is_won());
    }

    #[test]
    fn overlong_input_is_rejected_without_changing_progress() {
        let mut g = game();
        g.type_text("I PROMISE");
        assert!(!g.type_text("I PROMISE TO STAY!"));
        assert_eq!(g.progress(), 9);
        assert_eq!(g.input(), "I PROMISE");
    }

    #[test]
    fn wrong_full_length_input_does_not_win() {
        let mut g = game();
        assert!(g.type_text("I PROMISE TO STAX"));
        assert_eq!(g.progress(), g.target().len());
        assert!(!g.is_won());
    }
}
