//! In-memory session: navigation, the mounted engine, and background music.
//!
//! `Showcase` is what a front-end drives. It mounts a fresh engine whenever a
//! day's game opens, drops it on exit or win, holds the success frame for the
//! engine's celebration delay, and emits the win signal exactly once per
//! mount. Every method that can change the audible track returns the
//! [`AudioCommand`]s the media backend should run.

use std::sync::Arc;

use crate::audio::{AudioCommand, AudioController, desired_track};
use crate::catalog::{CatalogError, DayCatalog, DayDescriptor, DayId};
use crate::config::TuningConfig;
use crate::games::{GameInput, MiniGame};
use crate::navigation::{NavEffect, NavigationState, Transition, View};
use crate::reveal::RevealContent;
use crate::story::{IntroProgress, IntroStory, StoryScript};

/// Driver period while a success frame is held.
pub const CELEBRATION_TICK_MS: u32 = 100;

const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    Playing,
    /// Engine is won; the win goes out when the hold runs down.
    Celebrating { remaining_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub day: DayId,
    pub game: MiniGame,
    pub phase: StagePhase,
}

#[derive(Debug, Clone)]
pub struct Showcase {
    catalog: Arc<DayCatalog>,
    tuning: Arc<TuningConfig>,
    story: Arc<StoryScript>,
    nav: NavigationState,
    intro: IntroStory,
    stage: Option<Stage>,
    audio: AudioController,
    seed: u64,
    mounts: u64,
}

impl Showcase {
    #[must_use]
    pub fn new(catalog: DayCatalog, tuning: TuningConfig, story: StoryScript, seed: u64) -> Self {
        let audio = AudioController::new(tuning.audio.clone(), catalog.intro_track.clone());
        let intro = IntroStory::new(story.intro.len());
        Self {
            catalog: Arc::new(catalog),
            tuning: Arc::new(tuning),
            story: Arc::new(story),
            nav: NavigationState::new(),
            intro,
            stage: None,
            audio,
            seed,
            mounts: 0,
        }
    }

    /// Session over the bundled catalog, tuning and story.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled catalog fails validation.
    pub fn from_static(seed: u64) -> Result<Self, CatalogError> {
        let catalog = DayCatalog::load_embedded()?;
        Ok(Self::new(
            catalog,
            TuningConfig::load_from_static(),
            StoryScript::load_from_static(),
            seed,
        ))
    }

    #[must_use]
    pub fn catalog(&self) -> &DayCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    #[must_use]
    pub fn story(&self) -> &StoryScript {
        &self.story
    }

    #[must_use]
    pub const fn nav(&self) -> &NavigationState {
        &self.nav
    }

    #[must_use]
    pub const fn intro(&self) -> &IntroStory {
        &self.intro
    }

    #[must_use]
    pub const fn audio(&self) -> &AudioController {
        &self.audio
    }

    #[must_use]
    pub const fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    #[must_use]
    pub fn game(&self) -> Option<&MiniGame> {
        self.stage.as_ref().map(|s| &s.game)
    }

    #[must_use]
    pub fn active_day(&self) -> Option<&DayDescriptor> {
        self.nav.active_day().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        matches!(
            self.stage.as_ref().map(|s| s.phase),
            Some(StagePhase::Celebrating { .. })
        )
    }

    /// Content for the reveal screen, when one is showing.
    #[must_use]
    pub fn reveal(&self) -> Option<RevealContent> {
        if self.nav.view() != View::Reveal {
            return None;
        }
        self.active_day()
            .map(|day| RevealContent::for_day(day, &self.story))
    }

    /// Driver period for whatever is mounted right now.
    #[must_use]
    pub fn tick_interval_ms(&self) -> Option<u32> {
        let stage = self.stage.as_ref()?;
        match stage.phase {
            StagePhase::Playing => stage.game.kind().tick_interval_ms(&self.tuning),
            StagePhase::Celebrating { .. } => Some(CELEBRATION_TICK_MS),
        }
    }

    /// One click on the intro text.
    pub fn advance_intro(&mut self) -> Vec<AudioCommand> {
        if self.nav.view() != View::Intro {
            return Vec::new();
        }
        match self.intro.advance() {
            IntroProgress::Next(_) => Vec::new(),
            IntroProgress::Complete => self.complete_intro(),
        }
    }

    pub fn complete_intro(&mut self) -> Vec<AudioCommand> {
        let mut commands = Vec::new();
        if let Some(NavEffect::BeginAudio) = self.nav.complete_intro() {
            commands = self.audio.begin();
        }
        self.sync_track();
        commands
    }

    /// Open a day from the menu. Ids outside the catalog are a caller bug.
    pub fn select_day(&mut self, id: DayId) -> Transition {
        debug_assert!(self.catalog.contains(id), "day {id} is not in the catalog");
        let Some(kind) = self.catalog.get(id).map(|d| d.game) else {
            log::warn!("select_day: unknown day {id}");
            return Transition::stay(self.nav.view());
        };
        let transition = self.nav.select_day(id);
        if !transition.changed() {
            return transition;
        }
        self.stage = if transition.to == View::Game {
            self.mounts = self.mounts.wrapping_add(1);
            let seed = self
                .seed
                .wrapping_add(self.mounts.wrapping_mul(SEED_STRIDE))
                ^ u64::from(id.get());
            log::debug!("mounting {kind} for day {id}");
            Some(Stage {
                day: id,
                game: MiniGame::new(kind, &self.tuning, seed),
                phase: StagePhase::Playing,
            })
        } else {
            None
        };
        self.sync_track();
        transition
    }

    /// Route an input to the mounted engine. Returns whether it was applied.
    pub fn input(&mut self, input: &GameInput) -> bool {
        let Some(stage) = self.stage.as_mut() else {
            return false;
        };
        if stage.phase != StagePhase::Playing {
            return false;
        }
        let applied = stage.game.handle(input);
        self.check_win();
        applied
    }

    /// Feed elapsed time to the mounted engine or the celebration hold.
    /// No-op once the stage is unmounted.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };
        match stage.phase {
            StagePhase::Playing => {
                stage.game.advance(elapsed_ms);
                self.check_win();
            }
            StagePhase::Celebrating { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.emit_win();
                } else {
                    stage.phase = StagePhase::Celebrating { remaining_ms };
                }
            }
        }
    }

    pub fn exit_to_menu(&mut self) -> Transition {
        self.stage = None;
        let transition = self.nav.exit_to_menu();
        self.sync_track();
        transition
    }

    pub fn advance_audio(&mut self, elapsed_ms: u32) -> Vec<AudioCommand> {
        self.audio.advance(elapsed_ms)
    }

    /// The toggle click is a user gesture, so it unlocks playback too.
    pub fn toggle_audio(&mut self) -> Vec<AudioCommand> {
        let mut commands = self.audio.unlock();
        commands.extend(self.audio.toggle());
        commands
    }

    pub fn unlock_audio(&mut self) -> Vec<AudioCommand> {
        self.audio.unlock()
    }

    fn check_win(&mut self) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };
        if stage.phase != StagePhase::Playing || !stage.game.is_won() {
            return;
        }
        let hold = stage.game.kind().celebration_ms(&self.tuning);
        if hold == 0 {
            self.emit_win();
        } else {
            stage.phase = StagePhase::Celebrating { remaining_ms: hold };
        }
    }

    fn emit_win(&mut self) {
        if let Some(stage) = self.stage.take() {
            log::debug!("day {} won", stage.day);
            self.nav.report_win(stage.day);
            self.sync_track();
        }
    }

    fn sync_track(&mut self) {
        let track = desired_track(&self.nav, &self.catalog);
        self.audio.request(&track);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{GameKind, Point};

    fn session() -> Showcase {
        let mut show = Showcase::from_static(7).unwrap();
        show.complete_intro();
        show
    }

    #[test]
    fn intro_clicks_lead_to_menu_and_start_music() {
        let mut show = Showcase::from_static(1).unwrap();
        let lines = show.story().intro.len();
        for _ in 1..lines {
            assert!(show.advance_intro().is_empty());
        }
        let commands = show.advance_intro();
        assert_eq!(commands, vec![AudioCommand::Play]);
        assert_eq!(show.nav().view(), View::Menu);
        assert!(show.audio().is_playing());
    }

    #[test]
    fn single_click_day_wins_immediately() {
        let mut show = session();
        show.select_day(DayId(8));
        assert!(show.input(&GameInput::Activate));
        assert_eq!(show.nav().view(), View::Reveal);
        assert!(show.game().is_none());
        let reveal = show.reveal().unwrap();
        assert!(!reveal.letter.is_empty());
    }

    #[test]
    fn celebration_holds_before_reveal() {
        let mut show = session();
        show.select_day(DayId(5));
        show.input(&GameInput::Type("i promise to stay".into()));
        assert!(show.is_celebrating());
        assert_eq!(show.nav().view(), View::Game);
        assert_eq!(show.tick_interval_ms(), Some(CELEBRATION_TICK_MS));
        show.advance(400);
        assert_eq!(show.nav().view(), View::Game);
        show.advance(100);
        assert_eq!(show.nav().view(), View::Reveal);
        assert!(show.nav().is_completed(DayId(5)));
    }

    #[test]
    fn exit_during_celebration_drops_the_win() {
        let mut show = session();
        show.select_day(DayId(2));
        show.input(&GameInput::DragTo(Point::new(0.0, 100.0)));
        show.input(&GameInput::Release(Some(crate::games::DropGeometry {
            object_center: Point::new(10.0, 10.0),
            goal_center: Point::new(12.0, 10.0),
        })));
        assert!(show.is_celebrating());
        show.exit_to_menu();
        show.advance(5_000);
        assert!(!show.nav().is_completed(DayId(2)));
        assert_eq!(show.nav().view(), View::Menu);
    }

    #[test]
    fn revisiting_a_completed_day_mounts_nothing() {
        let mut show = session();
        show.select_day(DayId(8));
        show.input(&GameInput::Activate);
        show.exit_to_menu();
        let t = show.select_day(DayId(8));
        assert_eq!(t.to, View::Reveal);
        assert!(show.game().is_none());
        assert!(!show.input(&GameInput::Activate));
    }

    #[test]
    fn each_mount_starts_fresh() {
        let mut show = session();
        show.select_day(DayId(6));
        show.input(&GameInput::Hug);
        show.exit_to_menu();
        show.select_day(DayId(6));
        let Some(MiniGame::Meter(game)) = show.game() else {
            panic!("expected meter game");
        };
        assert!((game.warmth() - 30.0).abs() < f32::EPSILON);
        assert_eq!(show.game().map(MiniGame::kind), Some(GameKind::MeterBalance));
    }

    #[test]
    fn select_outside_the_menu_keeps_the_mounted_game() {
        let mut intro = Showcase::from_static(2).unwrap();
        assert!(!intro.select_day(DayId(1)).changed());
        assert!(intro.game().is_none());
        assert_eq!(intro.advance_intro(), Vec::new());

        let mut show = session();
        show.select_day(DayId(6));
        show.input(&GameInput::Hug);
        let t = show.select_day(DayId(1));
        assert!(!t.changed());
        assert_eq!(show.nav().active_day(), Some(DayId(6)));
        let Some(MiniGame::Meter(game)) = show.game() else {
            panic!("meter game should still be mounted");
        };
        assert!(game.warmth() > 30.0);
    }

    #[test]
    fn toggling_music_first_unlocks_and_plays() {
        let mut show = Showcase::from_static(4).unwrap();
        assert!(!show.audio().is_unlocked());
        let commands = show.toggle_audio();
        assert!(show.audio().is_unlocked());
        assert!(show.audio().is_playing());
        assert_eq!(commands.last(), Some(&AudioCommand::Play));
        let commands = show.toggle_audio();
        assert!(!show.audio().is_playing());
        assert_eq!(commands, vec![AudioCommand::Pause]);
    }

    #[test]
    fn track_follows_navigation() {
        let mut show = session();
        show.select_day(DayId(3));
        let day_track = show.catalog().get(DayId(3)).unwrap().track.clone();
        assert_eq!(show.audio().target(), &day_track);
        show.exit_to_menu();
        assert_eq!(show.audio().target(), &show.catalog().menu_track);
    }
}
