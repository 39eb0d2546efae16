//! Tuning configuration for the mini-games and audio fades.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::AudioConfig;
use crate::games::{
    CatchConfig, DragConfig, MemoryConfig, MeterConfig, PhraseConfig, ReactionConfig, SpotConfig,
};

const DEFAULT_TUNING_DATA: &str =
    include_str!("../../valentine-web/static/assets/data/tuning.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
        value: f32,
    },
    #[error("{field} band is inverted (low {low:.2} >= high {high:.2})")]
    InvertedBand {
        field: &'static str,
        low: f32,
        high: f32,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

impl ConfigError {
    pub(crate) fn check_range(
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    ) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                min,
                max,
                value,
            })
        }
    }
}

/// Every engine's knobs in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TuningConfig {
    pub catch: CatchConfig,
    pub drag: DragConfig,
    pub memory: MemoryConfig,
    pub spot: SpotConfig,
    pub phrase: PhraseConfig,
    pub meter: MeterConfig,
    pub reaction: ReactionConfig,
    pub audio: AudioConfig,
}

impl TuningConfig {
    /// Parse and validate tuning JSON; missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any section fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Tuning shipped with the web assets, falling back to compiled defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_TUNING_DATA).unwrap_or_else(|err| {
            log::warn!("embedded tuning rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns the first section that fails its own validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catch.validate()?;
        self.drag.validate()?;
        self.memory.validate()?;
        self.spot.validate()?;
        self.phrase.validate()?;
        self.meter.validate()?;
        self.reaction.validate()?;
        self.audio.validate()
    }
}
