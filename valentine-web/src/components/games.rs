//! One view per engine. Views only render engine state and translate DOM
//! events into [`GameInput`]s; every rule lives in the engine.
use yew::prelude::*;

use crate::game::{GameInput, MiniGame};

pub mod catch;
pub mod drag;
pub mod memory;
pub mod meter;
pub mod phrase;
pub mod reaction;
pub mod spot;
pub mod surprise;

#[derive(Properties, Clone)]
pub struct EngineProps<G: Clone + 'static> {
    pub game: G,
    /// Session revision; engine state itself is not comparable.
    pub revision: u64,
    pub on_input: Callback<GameInput>,
}

impl<G: Clone + 'static> PartialEq for EngineProps<G> {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.on_input == other.on_input
    }
}

/// Render whichever engine is mounted.
#[must_use]
pub fn engine_view(game: &MiniGame, revision: u64, on_input: &Callback<GameInput>) -> Html {
    let on_input = on_input.clone();
    match game {
        MiniGame::Catch(g) => {
            html! { <catch::CatchView game={g.clone()} {revision} {on_input} /> }
        }
        MiniGame::Drag(g) => html! { <drag::DragView game={g.clone()} {revision} {on_input} /> },
        MiniGame::Memory(g) => {
            html! { <memory::MemoryView game={g.clone()} {revision} {on_input} /> }
        }
        MiniGame::Spot(g) => html! { <spot::SpotView game={g.clone()} {revision} {on_input} /> },
        MiniGame::Phrase(g) => {
            html! { <phrase::PhraseView game={g.clone()} {revision} {on_input} /> }
        }
        MiniGame::Meter(g) => html! { <meter::MeterView game={g.clone()} {revision} {on_input} /> },
        MiniGame::Reaction(g) => {
            html! { <reaction::ReactionView game={g.clone()} {revision} {on_input} /> }
        }
        MiniGame::SingleClick(g) => {
            html! { <surprise::SurpriseView game={*g} {revision} {on_input} /> }
        }
    }
}
