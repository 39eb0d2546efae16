use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, SpotGame};

#[function_component(SpotView)]
pub fn spot_view(p: &EngineProps<SpotGame>) -> Html {
    let game = &p.game;
    let cells = (0..game.cell_count()).map(|index| {
        let onclick = {
            let cb = p.on_input.clone();
            Callback::from(move |_: MouseEvent| cb.emit(GameInput::PickCell(index)))
        };
        let target = game.is_target(index);
        html! {
            <button
                key={index.to_string()}
                class="spot-cell relative aspect-square text-3xl flex items-center justify-center hover:scale-105 transition-transform"
                data-index={index.to_string()}
                onclick={onclick}
            >
                { "🧸" }
                if target {
                    <span class="absolute top-[42%] left-1/2 -translate-x-1/2 w-1.5 h-1.5 rounded-full bg-red-600"></span>
                }
            </button>
        }
    });
    let timer_class = classes!(
        "timer",
        "font-mono",
        "text-2xl",
        if game.is_urgent() { "text-red-600 animate-pulse" } else { "text-stone-600" },
    );
    let grid_style = format!(
        "grid-template-columns: repeat({}, minmax(0, 1fr));",
        game.columns()
    );

    html! {
        <div class="spot-game w-full max-w-md mx-auto space-y-4">
            <div class="flex justify-between items-baseline">
                <p class="font-['Cormorant_Garamond'] text-xl">{ "LAL Nak aslela Teddy shodha" }</p>
                <span class={timer_class}>{ format!("{}s", game.seconds_left()) }</span>
            </div>
            <div class="grid gap-2" style={grid_style}>
                { for cells }
            </div>
        </div>
    }
}
