//! The fixed, ordered list of themed days.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::audio::TrackRef;
use crate::games::GameKind;

const DEFAULT_DAYS_DATA: &str = include_str!("../../valentine-web/static/assets/data/days.json");

pub const DAY_COUNT: usize = 8;

/// Identifier of a day; also its position in the catalog (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(pub u8);

impl DayId {
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Menu card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayIcon {
    Flower,
    Star,
    Gift,
    Smile,
    Lock,
    Cloud,
    Heart,
    Sparkles,
}

impl DayIcon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Flower => "🌹",
            Self::Star => "⭐",
            Self::Gift => "🎁",
            Self::Smile => "🧸",
            Self::Lock => "🔒",
            Self::Cloud => "☁️",
            Self::Heart => "❤️",
            Self::Sparkles => "✨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDescriptor {
    pub id: DayId,
    pub date: String,
    pub title: String,
    pub icon: DayIcon,
    pub game: GameKind,
    /// Colour token for the menu card and reveal backdrop.
    pub theme: String,
    pub reveal_title: String,
    pub message: String,
    pub note: String,
    pub track: TrackRef,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(String),
    #[error("catalog must contain {expected} days, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("day at position {position} has id {found}")]
    OutOfOrder { position: usize, found: DayId },
    #[error("day {day} has an empty {field}")]
    EmptyField { day: DayId, field: &'static str },
    #[error("{0} track is empty")]
    EmptyAmbientTrack(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCatalog {
    pub intro_track: TrackRef,
    pub menu_track: TrackRef,
    days: Vec<DayDescriptor>,
}

impl DayCatalog {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the day list is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|err| CatalogError::Json(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog bundled with the web assets.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file has been broken.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_DAYS_DATA)
    }

    /// # Errors
    ///
    /// Returns the first structural problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.intro_track.is_empty() {
            return Err(CatalogError::EmptyAmbientTrack("intro"));
        }
        if self.menu_track.is_empty() {
            return Err(CatalogError::EmptyAmbientTrack("menu"));
        }
        if self.days.len() != DAY_COUNT {
            return Err(CatalogError::WrongLength {
                expected: DAY_COUNT,
                found: self.days.len(),
            });
        }
        for (position, day) in self.days.iter().enumerate() {
            if usize::from(day.id.get()) != position + 1 {
                return Err(CatalogError::OutOfOrder {
                    position: position + 1,
                    found: day.id,
                });
            }
            let fields = [
                ("date", day.date.as_str()),
                ("title", day.title.as_str()),
                ("theme", day.theme.as_str()),
                ("reveal_title", day.reveal_title.as_str()),
                ("message", day.message.as_str()),
                ("note", day.note.as_str()),
                ("track", day.track.as_str()),
            ];
            if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
                return Err(CatalogError::EmptyField { day: day.id, field });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn days(&self) -> &[DayDescriptor] {
        &self.days
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: DayId) -> Option<&DayDescriptor> {
        self.days.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: DayId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = DayId> + '_ {
        self.days.iter().map(|d| d.id)
    }
}
