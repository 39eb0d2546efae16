use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, MemoryGame};

/// Face glyph for a configured symbol name; unknown names show as text.
fn face(symbol: &str) -> &str {
    match symbol {
        "cookie" => "🍪",
        "candy" => "🍬",
        "croissant" => "🥐",
        "cake" => "🍰",
        "icecream" => "🍦",
        "coffee" => "☕",
        other => other,
    }
}

#[function_component(MemoryView)]
pub fn memory_view(p: &EngineProps<MemoryGame>) -> Html {
    let game = &p.game;
    let cards = (0..game.len()).map(|index| {
        let face_up = game.is_face_up(index);
        let matched = game.is_matched(index);
        let onclick = {
            let cb = p.on_input.clone();
            Callback::from(move |_: MouseEvent| cb.emit(GameInput::RevealCard(index)))
        };
        let class = classes!(
            "memory-card",
            "aspect-square",
            "rounded-sm",
            "text-3xl",
            "flex",
            "items-center",
            "justify-center",
            "transition-all",
            if face_up { "bg-white shadow-md" } else { "bg-[#8B3A3A] text-white/60" },
            matched.then_some("ring-2 ring-[#D4AF37]"),
        );
        let glyph = if face_up {
            game.symbol(index).map_or("?", face)
        } else {
            "🎁"
        };
        html! {
            <button
                key={index.to_string()}
                class={class}
                data-index={index.to_string()}
                disabled={matched}
                onclick={onclick}
            >
                { glyph }
            </button>
        }
    });

    html! {
        <div class="memory-game w-full max-w-sm mx-auto space-y-4">
            <p class="text-center font-['Cormorant_Garamond'] italic text-xl text-stone-600">
                { "God-God jodya lava" }
            </p>
            <div class="grid grid-cols-4 gap-3">
                { for cards }
            </div>
        </div>
    }
}
