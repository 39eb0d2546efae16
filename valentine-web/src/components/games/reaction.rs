use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, ReactionGame};

#[function_component(ReactionView)]
pub fn reaction_view(p: &EngineProps<ReactionGame>) -> Html {
    let game = &p.game;
    let targets = game.targets().iter().map(|target| {
        let onclick = {
            let cb = p.on_input.clone();
            let id = target.id;
            Callback::from(move |_: MouseEvent| cb.emit(GameInput::Hit(id)))
        };
        html! {
            <button
                key={target.id.to_string()}
                class="target absolute p-2 text-3xl drop-shadow-md"
                style={format!("left: {:.1}%; top: {:.1}%;", target.x, target.y)}
                {onclick}
            >
                { "💋" }
            </button>
        }
    });

    html! {
        <div class="reaction-game relative w-full h-80 bg-stone-50 border border-stone-200 rounded-lg overflow-hidden cursor-crosshair">
            <div class="score absolute top-4 right-4 font-bold text-stone-300 text-2xl">
                { format!("{}/{}", game.hits(), game.target_hits()) }
            </div>
            { for targets }
        </div>
    }
}
