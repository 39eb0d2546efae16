//! Mini-game engines.
//!
//! Each engine keeps its own closed-form state and exposes a pure `is_won`
//! predicate. [`MiniGame`] is the tagged union the session mounts; it routes
//! inputs and elapsed time to whichever variant is live and ignores inputs
//! that belong to another variant.

pub mod catch;
pub mod drag;
pub mod memory;
pub mod meter;
pub mod phrase;
pub mod reaction;
pub mod spot;
pub mod surprise;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TuningConfig;

pub use catch::{CatchConfig, CatchGame, FallingItem, ItemKind};
pub use drag::{DragConfig, DragGame, DropGeometry, Point, ReleaseOutcome};
pub use memory::{MemoryConfig, MemoryGame, RevealOutcome};
pub use meter::{MeterConfig, MeterGame, Mood};
pub use phrase::{PhraseConfig, PhraseGame};
pub use reaction::{ReactionConfig, ReactionGame, Target};
pub use spot::{SpotConfig, SpotGame};
pub use surprise::SingleClickGame;

/// Which engine a day mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    CatchItems,
    ProximityDrag,
    MemoryMatch,
    SpotDifference,
    TypedPhrase,
    MeterBalance,
    ReactionTargets,
    SingleClick,
}

impl GameKind {
    pub const ALL: [Self; 8] = [
        Self::CatchItems,
        Self::ProximityDrag,
        Self::MemoryMatch,
        Self::SpotDifference,
        Self::TypedPhrase,
        Self::MeterBalance,
        Self::ReactionTargets,
        Self::SingleClick,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CatchItems => "catch_items",
            Self::ProximityDrag => "proximity_drag",
            Self::MemoryMatch => "memory_match",
            Self::SpotDifference => "spot_difference",
            Self::TypedPhrase => "typed_phrase",
            Self::MeterBalance => "meter_balance",
            Self::ReactionTargets => "reaction_targets",
            Self::SingleClick => "single_click",
        }
    }

    /// Period of the driver timer for this engine, if it runs on one.
    #[must_use]
    pub const fn tick_interval_ms(self, tuning: &TuningConfig) -> Option<u32> {
        match self {
            Self::CatchItems => Some(tuning.catch.tick_ms),
            Self::MemoryMatch => Some(tuning.memory.tick_ms),
            Self::SpotDifference => Some(tuning.spot.tick_ms),
            Self::MeterBalance => Some(tuning.meter.tick_ms),
            Self::ReactionTargets => Some(tuning.reaction.tick_ms),
            Self::ProximityDrag | Self::TypedPhrase | Self::SingleClick => None,
        }
    }

    /// How long the success frame is held before the win signal goes out.
    #[must_use]
    pub const fn celebration_ms(self, tuning: &TuningConfig) -> u32 {
        match self {
            Self::ProximityDrag => tuning.drag.celebration_ms,
            Self::MemoryMatch => tuning.memory.celebration_ms,
            Self::TypedPhrase => tuning.phrase.celebration_ms,
            Self::CatchItems
            | Self::SpotDifference
            | Self::MeterBalance
            | Self::ReactionTargets
            | Self::SingleClick => 0,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User input routed to the mounted engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GameInput {
    /// Catcher position as a percentage of the play field width.
    MoveCatcher { x: f32 },
    /// Current drag offset from the rest position, in pixels.
    DragTo(Point),
    /// Drag released; `None` when the element geometry could not be read.
    Release(Option<DropGeometry>),
    /// Flip a memory card by deck index.
    RevealCard(usize),
    /// Pick a spot-the-difference cell.
    PickCell(usize),
    /// Full contents of the phrase input box.
    Type(String),
    Hug,
    /// Click a reaction target by id.
    Hit(u32),
    Activate,
}

/// Accumulates elapsed milliseconds into whole ticks of a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    period_ms: u32,
    carry_ms: u32,
}

impl TickClock {
    #[must_use]
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            carry_ms: 0,
        }
    }

    /// Add elapsed time and return how many whole periods completed.
    pub fn accumulate(&mut self, elapsed_ms: u32) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }
        let total = self.carry_ms.saturating_add(elapsed_ms);
        self.carry_ms = total % self.period_ms;
        total / self.period_ms
    }

    #[must_use]
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

/// The live state of whichever engine is mounted.
#[derive(Debug, Clone)]
pub enum MiniGame {
    Catch(CatchGame),
    Drag(DragGame),
    Memory(MemoryGame),
    Spot(SpotGame),
    Phrase(PhraseGame),
    Meter(MeterGame),
    Reaction(ReactionGame),
    SingleClick(SingleClickGame),
}

impl MiniGame {
    /// Build a fresh engine for `kind`; no state carries over between mounts.
    #[must_use]
    pub fn new(kind: GameKind, tuning: &TuningConfig, seed: u64) -> Self {
        match kind {
            GameKind::CatchItems => Self::Catch(CatchGame::new(tuning.catch.clone(), seed)),
            GameKind::ProximityDrag => Self::Drag(DragGame::new(tuning.drag.clone())),
            GameKind::MemoryMatch => Self::Memory(MemoryGame::new(tuning.memory.clone(), seed)),
            GameKind::SpotDifference => Self::Spot(SpotGame::new(tuning.spot.clone(), seed)),
            GameKind::TypedPhrase => Self::Phrase(PhraseGame::new(&tuning.phrase)),
            GameKind::MeterBalance => Self::Meter(MeterGame::new(tuning.meter.clone())),
            GameKind::ReactionTargets => {
                Self::Reaction(ReactionGame::new(tuning.reaction.clone(), seed))
            }
            GameKind::SingleClick => Self::SingleClick(SingleClickGame::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> GameKind {
        match self {
            Self::Catch(_) => GameKind::CatchItems,
            Self::Drag(_) => GameKind::ProximityDrag,
            Self::Memory(_) => GameKind::MemoryMatch,
            Self::Spot(_) => GameKind::SpotDifference,
            Self::Phrase(_) => GameKind::TypedPhrase,
            Self::Meter(_) => GameKind::MeterBalance,
            Self::Reaction(_) => GameKind::ReactionTargets,
            Self::SingleClick(_) => GameKind::SingleClick,
        }
    }

    /// Apply one input. Returns `false` when the input does not belong to
    /// this engine or was ignored by its rules.
    pub fn handle(&mut self, input: &GameInput) -> bool {
        match (self, input) {
            (Self::Catch(game), GameInput::MoveCatcher { x }) => game.move_catcher(*x),
            (Self::Drag(game), GameInput::DragTo(offset)) => game.drag_to(*offset),
            (Self::Drag(game), GameInput::Release(geometry)) => {
                !matches!(game.release(*geometry), ReleaseOutcome::Ignored)
            }
            (Self::Memory(game), GameInput::RevealCard(index)) => {
                !matches!(game.reveal(*index), RevealOutcome::Ignored)
            }
            (Self::Spot(game), GameInput::PickCell(index)) => game.pick(*index).is_some(),
            (Self::Phrase(game), GameInput::Type(text)) => game.type_text(text),
            (Self::Meter(game), GameInput::Hug) => game.hug(),
            (Self::Reaction(game), GameInput::Hit(id)) => game.hit(*id),
            (Self::SingleClick(game), GameInput::Activate) => game.activate(),
            _ => false,
        }
    }

    /// Advance timer-driven engines; no-op for the others.
    pub fn advance(&mut self, elapsed_ms: u32) {
        match self {
            Self::Catch(game) => game.advance(elapsed_ms),
            Self::Memory(game) => game.advance(elapsed_ms),
            Self::Spot(game) => game.advance(elapsed_ms),
            Self::Meter(game) => game.advance(elapsed_ms),
            Self::Reaction(game) => game.advance(elapsed_ms),
            Self::Drag(_) | Self::Phrase(_) | Self::SingleClick(_) => {}
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        match self {
            Self::Catch(game) => game.is_won(),
            Self::Drag(game) => game.is_won(),
            Self::Memory(game) => game.is_won(),
            Self::Spot(game) => game.is_won(),
            Self::Phrase(game) => game.is_won(),
            Self::Meter(game) => game.is_won(),
            Self::Reaction(game) => game.is_won(),
            Self::SingleClick(game) => game.is_won(),
        }
    }
}
