//! Background music controller.
//!
//! The controller never touches a media element. It decides which track should
//! be audible, runs volume fades on a fixed step clock, and emits
//! [`AudioCommand`]s for a backend to execute in order.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::catalog::DayCatalog;
use crate::config::ConfigError;
use crate::games::TickClock;
use crate::navigation::{NavigationState, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub fade_step: f32,
    pub fade_interval_ms: u32,
    /// Fade-out stops once volume is at or below this.
    pub fade_out_floor: f32,
    /// Fade-in stops once volume is at or above this.
    pub fade_in_ceiling: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            fade_step: 0.1,
            fade_interval_ms: 100,
            fade_out_floor: 0.1,
            fade_in_ceiling: 0.9,
        }
    }
}

impl AudioConfig {
    /// # Errors
    ///
    /// Returns an error for a zero interval or volumes outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_interval_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "audio.fade_interval_ms",
            });
        }
        if self.fade_step <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "audio.fade_step",
            });
        }
        ConfigError::check_range("audio.fade_step", self.fade_step, 0.0, 1.0)?;
        ConfigError::check_range("audio.fade_out_floor", self.fade_out_floor, 0.0, 1.0)?;
        ConfigError::check_range("audio.fade_in_ceiling", self.fade_in_ceiling, 0.0, 1.0)
    }
}

/// Opaque reference to an audio asset (its file name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRef(String);

impl TrackRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The name escaped for use as a media source URL.
    #[must_use]
    pub fn url(&self) -> String {
        encode_uri(&self.0)
    }
}

impl From<&str> for TrackRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Percent-encode everything outside the URI reserved and unreserved sets,
/// leaving `/`, `?`, `#` and friends intact.
#[must_use]
pub fn encode_uri(input: &str) -> String {
    const KEEP: &[u8] = b";,/?:@&=+$-_.!~*'()#";
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || KEEP.contains(&byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Track that should be audible for the current navigation state.
#[must_use]
pub fn desired_track(nav: &NavigationState, catalog: &DayCatalog) -> TrackRef {
    match nav.view() {
        View::Intro => catalog.intro_track.clone(),
        View::Menu => catalog.menu_track.clone(),
        View::Game | View::Reveal => nav
            .active_day()
            .and_then(|id| catalog.get(id))
            .map_or_else(|| catalog.menu_track.clone(), |day| day.track.clone()),
    }
}

/// Instruction for the media backend.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Pause,
    /// Replace and reload the source; the payload is already URL-escaped.
    SetSource(String),
    Play,
    SetVolume(f32),
}

#[derive(Debug, Clone, PartialEq)]
enum Fade {
    Idle,
    Out { next: TrackRef },
    In,
}

#[derive(Debug, Clone)]
pub struct AudioController {
    cfg: AudioConfig,
    clock: TickClock,
    current: TrackRef,
    volume: f32,
    playing: bool,
    unlocked: bool,
    fade: Fade,
}

impl AudioController {
    /// Start paused and locked with `initial` loaded at full volume.
    #[must_use]
    pub fn new(cfg: AudioConfig, initial: TrackRef) -> Self {
        let clock = TickClock::new(cfg.fade_interval_ms);
        Self {
            cfg,
            clock,
            current: initial,
            volume: 1.0,
            playing: false,
            unlocked: false,
            fade: Fade::Idle,
        }
    }

    /// Commands that bring a fresh media element in line with this controller.
    #[must_use]
    pub fn initial_commands(&self) -> Vec<AudioCommand> {
        vec![
            AudioCommand::SetSource(self.current.url()),
            AudioCommand::SetVolume(self.volume),
        ]
    }

    #[must_use]
    pub const fn current(&self) -> &TrackRef {
        &self.current
    }

    /// Track the controller is heading towards.
    #[must_use]
    pub fn target(&self) -> &TrackRef {
        match &self.fade {
            Fade::Out { next } => next,
            Fade::Idle | Fade::In => &self.current,
        }
    }

    #[must_use]
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade != Fade::Idle
    }

    /// Fade step period while a fade is running.
    #[must_use]
    pub fn tick_interval_ms(&self) -> Option<u32> {
        self.is_fading().then_some(self.cfg.fade_interval_ms)
    }

    #[must_use]
    const fn audible(&self) -> bool {
        self.playing && self.unlocked
    }

    /// Ask for `track`; a change starts a fade-out and the swap happens when
    /// it finishes.
    pub fn request(&mut self, track: &TrackRef) {
        if track == self.target() {
            return;
        }
        if !matches!(self.fade, Fade::Out { .. }) {
            self.clock = TickClock::new(self.cfg.fade_interval_ms);
        }
        log::debug!("audio: fading to {}", track.as_str());
        self.fade = Fade::Out {
            next: track.clone(),
        };
    }

    /// Run fade steps for the elapsed time.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<AudioCommand> {
        let mut commands = Vec::new();
        for _ in 0..self.clock.accumulate(elapsed_ms) {
            if !self.is_fading() {
                break;
            }
            self.step(&mut commands);
        }
        commands
    }

    fn step(&mut self, commands: &mut Vec<AudioCommand>) {
        match std::mem::replace(&mut self.fade, Fade::Idle) {
            Fade::Idle => {}
            Fade::Out { next } => {
                if self.volume > self.cfg.fade_out_floor {
                    self.set_volume(self.volume - self.cfg.fade_step, commands);
                    self.fade = Fade::Out { next };
                    return;
                }
                commands.push(AudioCommand::Pause);
                commands.push(AudioCommand::SetSource(next.url()));
                self.current = next;
                if self.audible() {
                    self.set_volume(0.0, commands);
                    commands.push(AudioCommand::Play);
                    self.fade = Fade::In;
                }
            }
            Fade::In => {
                if self.volume < self.cfg.fade_in_ceiling {
                    self.set_volume(self.volume + self.cfg.fade_step, commands);
                    self.fade = Fade::In;
                }
            }
        }
    }

    fn set_volume(&mut self, volume: f32, commands: &mut Vec<AudioCommand>) {
        self.volume = volume.clamp(0.0, 1.0);
        commands.push(AudioCommand::SetVolume(self.volume));
    }

    /// The first user gesture; playback may start from here on.
    pub fn unlock(&mut self) -> Vec<AudioCommand> {
        if self.unlocked {
            return Vec::new();
        }
        self.unlocked = true;
        self.sync_playback()
    }

    /// Intro finished: the finishing click doubles as the unlocking gesture.
    pub fn begin(&mut self) -> Vec<AudioCommand> {
        self.unlocked = true;
        self.set_playing(true)
    }

    pub fn set_playing(&mut self, playing: bool) -> Vec<AudioCommand> {
        if self.playing == playing {
            return Vec::new();
        }
        self.playing = playing;
        self.sync_playback()
    }

    pub fn toggle(&mut self) -> Vec<AudioCommand> {
        self.set_playing(!self.playing)
    }

    fn sync_playback(&mut self) -> Vec<AudioCommand> {
        let mut commands = Vec::new();
        if self.audible() {
            if matches!(self.fade, Fade::Idle) && self.volume < self.cfg.fade_in_ceiling {
                // A swap while paused left the volume low.
                self.fade = Fade::In;
                self.clock = TickClock::new(self.cfg.fade_interval_ms);
            }
            commands.push(AudioCommand::Play);
        } else {
            commands.push(AudioCommand::Pause);
        }
        commands
    }

    /// The backend could not start playback. The toggle keeps its value and
    /// nothing is retried.
    pub fn on_play_rejected(&self, reason: &str) {
        log::warn!("audio play failed for {}: {reason}", self.current.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AudioController {
        AudioController::new(AudioConfig::default(), TrackRef::from("intro.mp3"))
    }

    fn run_until_idle(audio: &mut AudioController) -> Vec<AudioCommand> {
        let mut all = Vec::new();
        for _ in 0..100 {
            if !audio.is_fading() {
                break;
            }
            all.extend(audio.advance(100));
        }
        all
    }

    #[test]
    fn encode_uri_matches_browser_behaviour() {
        assert_eq!(encode_uri("Come-Through.mp3"), "Come-Through.mp3");
        assert_eq!(
            encode_uri("Kiti Sangaichay Mala (PenduJatt.Com.Se).mp3"),
            "Kiti%20Sangaichay%20Mala%20(PenduJatt.Com.Se).mp3"
        );
        assert_eq!(encode_uri("a–b"), "a%E2%80%93b");
        assert_eq!(encode_uri("x/y?z=1#h"), "x/y?z=1#h");
    }

    #[test]
    fn track_change_fades_out_then_swaps_and_fades_in() {
        let mut audio = controller();
        audio.begin();
        audio.request(&TrackRef::from("day one.mp3"));
        let commands = run_until_idle(&mut audio);

        let pause = commands
            .iter()
            .position(|c| *c == AudioCommand::Pause)
            .unwrap();
        assert!(commands[..pause]
            .iter()
            .all(|c| matches!(c, AudioCommand::SetVolume(_))));
        assert_eq!(
            commands[pause + 1],
            AudioCommand::SetSource("day%20one.mp3".into())
        );
        assert_eq!(commands[pause + 2], AudioCommand::SetVolume(0.0));
        assert_eq!(commands[pause + 3], AudioCommand::Play);
        assert_eq!(audio.current().as_str(), "day one.mp3");
        assert!(audio.volume() >= 0.9 - f32::EPSILON);
    }

    #[test]
    fn swap_while_paused_does_not_play() {
        let mut audio = controller();
        audio.request(&TrackRef::from("menu.mp3"));
        let commands = run_until_idle(&mut audio);
        assert!(commands.contains(&AudioCommand::SetSource("menu.mp3".into())));
        assert!(!commands.contains(&AudioCommand::Play));
        assert!(!audio.is_fading());
    }

    #[test]
    fn same_track_request_is_a_no_op() {
        let mut audio = controller();
        audio.request(&TrackRef::from("intro.mp3"));
        assert!(!audio.is_fading());
        assert!(audio.advance(1_000).is_empty());
    }

    #[test]
    fn redirect_mid_fade_swaps_to_latest_request() {
        let mut audio = controller();
        audio.request(&TrackRef::from("a.mp3"));
        audio.advance(300);
        audio.request(&TrackRef::from("b.mp3"));
        let commands = run_until_idle(&mut audio);
        assert!(commands.contains(&AudioCommand::SetSource("b.mp3".into())));
        assert!(!commands.contains(&AudioCommand::SetSource("a.mp3".into())));
    }

    #[test]
    fn playback_needs_unlock_and_toggle() {
        let mut audio = controller();
        assert_eq!(audio.set_playing(true), vec![AudioCommand::Pause]);
        assert_eq!(audio.unlock(), vec![AudioCommand::Play]);
        assert_eq!(audio.toggle(), vec![AudioCommand::Pause]);
        assert!(!audio.is_playing());
        audio.on_play_rejected("NotAllowedError");
        assert!(!audio.is_playing());
    }

    #[test]
    fn resuming_after_a_quiet_swap_fades_back_in() {
        let mut audio = controller();
        audio.unlock();
        audio.request(&TrackRef::from("menu.mp3"));
        run_until_idle(&mut audio);
        assert!(audio.volume() <= 0.1 + 1e-4);
        assert_eq!(audio.toggle(), vec![AudioCommand::Play]);
        run_until_idle(&mut audio);
        assert!(audio.volume() >= 0.9 - f32::EPSILON);
    }
}
