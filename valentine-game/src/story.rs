//! Intro narration and the final letter.
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

const DEFAULT_STORY_DATA: &str = include_str!("../../valentine-web/static/assets/data/story.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryScript {
    /// Shown one at a time before the menu.
    pub intro: Vec<String>,
    pub signature: String,
    pub letter_heading: String,
    pub letter_aside: String,
    /// Body of the final letter; blank entries are paragraph breaks.
    pub letter: Vec<String>,
}

impl Default for StoryScript {
    fn default() -> Self {
        Self {
            intro: vec![String::from("Hi..."), String::from("Tayar aahes?")],
            signature: String::from("S."),
            letter_heading: String::new(),
            letter_aside: String::new(),
            letter: Vec::new(),
        }
    }
}

impl StoryScript {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or there are no intro lines.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let story: Self = serde_json::from_str(json)?;
        if story.intro.is_empty() {
            return Err(ConfigError::Empty {
                field: "story.intro",
            });
        }
        Ok(story)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_STORY_DATA).unwrap_or_else(|err| {
            log::warn!("embedded story rejected, using defaults: {err}");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroProgress {
    /// Now showing the line at this index.
    Next(usize),
    Complete,
}

/// Click-through cursor over the intro lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroStory {
    index: usize,
    len: usize,
}

impl IntroStory {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// One click. The click on the last line completes the intro.
    pub fn advance(&mut self) -> IntroProgress {
        if self.is_last() {
            IntroProgress::Complete
        } else {
            self.index += 1;
            IntroProgress::Next(self.index)
        }
    }
}
