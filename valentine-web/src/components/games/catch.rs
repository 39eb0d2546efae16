use yew::prelude::*;

use super::EngineProps;
use crate::dom::percent_across;
use crate::game::{CatchGame, GameInput, ItemKind};

#[function_component(CatchView)]
pub fn catch_view(p: &EngineProps<CatchGame>) -> Html {
    let field = use_node_ref();

    let on_pointer = {
        let field = field.clone();
        let cb = p.on_input.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(x) = percent_across(&field, e.client_x()) {
                cb.emit(GameInput::MoveCatcher { x });
            }
        })
    };
    let on_touch = {
        let field = field.clone();
        let cb = p.on_input.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().get(0) else {
                return;
            };
            if let Some(x) = percent_across(&field, touch.client_x()) {
                cb.emit(GameInput::MoveCatcher { x });
            }
        })
    };

    let game = &p.game;
    let items = game.items().iter().map(|item| {
        let glyph = match item.kind {
            ItemKind::Rose => "🌹",
            ItemKind::Thorn => "🥀",
        };
        html! {
            <span
                key={item.id.to_string()}
                class="absolute -translate-x-1/2 text-3xl pointer-events-none select-none"
                data-kind={format!("{:?}", item.kind).to_lowercase()}
                style={format!("left: {:.1}%; top: {:.1}%;", item.x, item.y)}
            >
                { glyph }
            </span>
        }
    });

    html! {
        <div class="catch-game w-full max-w-md mx-auto space-y-4">
            <div class="flex justify-between font-['Cormorant_Garamond'] text-xl">
                <span class="score">{ format!("Pakadle: {}/{}", game.score(), game.target_score()) }</span>
                <span class="text-[#8B3A3A] text-base">{ "Katyanpasun sawdhan! (X)" }</span>
            </div>
            <div
                ref={field}
                class="relative h-96 bg-rose-50 rounded-sm overflow-hidden touch-none cursor-none"
                onpointermove={on_pointer}
                ontouchmove={on_touch}
            >
                { for items }
                <span
                    class="catcher absolute bottom-[3%] -translate-x-1/2 text-4xl select-none"
                    style={format!("left: {:.1}%;", game.catcher_x())}
                >
                    { "🧺" }
                </span>
            </div>
        </div>
    }
}
