//! Valentine Week core
//!
//! Platform-agnostic logic for an eight-day romantic showcase: the day
//! catalog, the navigation state machine, the mini-game engines that gate each
//! day, reveal layout selection, and the background-music controller. Nothing
//! here touches a browser; a front-end renders whatever state this crate
//! produces and feeds user input and elapsed time back in.

pub mod audio;
pub mod catalog;
pub mod config;
pub mod games;
pub mod navigation;
pub mod reveal;
pub mod showcase;
pub mod story;

pub use audio::{AudioCommand, AudioConfig, AudioController, TrackRef, desired_track, encode_uri};
pub use catalog::{CatalogError, DAY_COUNT, DayCatalog, DayDescriptor, DayIcon, DayId};
pub use config::{ConfigError, TuningConfig};
pub use games::{
    CatchGame, DragGame, DropGeometry, GameInput, GameKind, ItemKind, MemoryGame, MeterGame,
    MiniGame, Mood, PhraseGame, Point, ReactionGame, SingleClickGame, SpotGame, TickClock,
};
pub use navigation::{NavEffect, NavigationState, Transition, View};
pub use reveal::{RevealContent, RevealLayout, layout_for};
pub use showcase::{CELEBRATION_TICK_MS, Showcase, Stage, StagePhase};
pub use story::{IntroProgress, IntroStory, StoryScript};
