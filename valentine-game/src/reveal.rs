//! Picks the reveal layout for a day and gathers what it shows.
use serde::{Deserialize, Serialize};

use crate::catalog::{DayDescriptor, DayId};
use crate::story::StoryScript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealLayout {
    RosePolaroid,
    ProposeDiptych,
    ChocolateBox,
    FinalLetter,
    Scrapbook,
}

#[must_use]
pub const fn layout_for(day: &DayDescriptor) -> RevealLayout {
    match day.id {
        DayId(1) => RevealLayout::RosePolaroid,
        DayId(2) => RevealLayout::ProposeDiptych,
        DayId(3) => RevealLayout::ChocolateBox,
        DayId(8) => RevealLayout::FinalLetter,
        _ => RevealLayout::Scrapbook,
    }
}

/// Everything a reveal screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealContent {
    pub layout: RevealLayout,
    pub day: DayId,
    pub day_title: String,
    pub date: String,
    pub title: String,
    pub message: String,
    pub note: String,
    pub theme: String,
    pub signature: String,
    pub letter_heading: String,
    pub letter_aside: String,
    /// Empty unless the layout is the final letter.
    pub letter: Vec<String>,
}

impl RevealContent {
    #[must_use]
    pub fn for_day(day: &DayDescriptor, story: &StoryScript) -> Self {
        let layout = layout_for(day);
        let (letter_heading, letter_aside, letter) = if layout == RevealLayout::FinalLetter {
            (
                story.letter_heading.clone(),
                story.letter_aside.clone(),
                story.letter.clone(),
            )
        } else {
            (String::new(), String::new(), Vec::new())
        };
        Self {
            layout,
            day: day.id,
            day_title: day.title.clone(),
            date: day.date.clone(),
            title: day.reveal_title.clone(),
            message: day.message.clone(),
            note: day.note.clone(),
            theme: day.theme.clone(),
            signature: story.signature.clone(),
            letter_heading,
            letter_aside,
            letter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DayCatalog;

    #[test]
    fn every_day_has_a_layout() {
        let catalog = DayCatalog::load_embedded().unwrap();
        let layouts: Vec<RevealLayout> = catalog.days().iter().map(layout_for).collect();
        assert_eq!(
            layouts,
            vec![
                RevealLayout::RosePolaroid,
                RevealLayout::ProposeDiptych,
                RevealLayout::ChocolateBox,
                RevealLayout::Scrapbook,
                RevealLayout::Scrapbook,
                RevealLayout::Scrapbook,
                RevealLayout::Scrapbook,
                RevealLayout::FinalLetter,
            ]
        );
    }

    #[test]
    fn only_the_final_letter_carries_letter_lines() {
        let catalog = DayCatalog::load_embedded().unwrap();
        let story = StoryScript::load_from_static();
        for day in catalog.days() {
            let content = RevealContent::for_day(day, &story);
            assert_eq!(
                content.letter.is_empty(),
                content.layout != RevealLayout::FinalLetter,
                "day {}",
                day.id
            );
            assert_eq!(content.title, day.reveal_title);
        }
    }
}
