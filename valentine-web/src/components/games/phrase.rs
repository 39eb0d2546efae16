use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, PhraseGame};

#[function_component(PhraseView)]
pub fn phrase_view(p: &EngineProps<PhraseGame>) -> Html {
    let game = &p.game;
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(GameInput::Type(input.value()));
        })
    };
    let total = game.target().chars().count().max(1);
    let pct = game.progress() * 100 / total;
    let letters = game.target().chars().enumerate().map(|(i, ch)| {
        let class = if i < game.progress() { "text-[#8B3A3A]" } else { "opacity-30" };
        html! { <span class={class}>{ ch.to_string() }</span> }
    });
    let lock = if game.is_won() { "🔓" } else { "🔒" };

    html! {
        <div class="phrase-game w-full max-w-md mx-auto space-y-6 text-center">
            <div class="text-6xl">{ lock }</div>
            <p class="text-xs tracking-[0.2em] uppercase font-bold text-stone-500">{ "TYPE KARA UNLOCK KARNYASATHI:" }</p>
            <div class="font-['Playfair_Display'] text-2xl tracking-widest min-h-[3rem]" aria-hidden="true">
                { for letters }
            </div>
            <input
                class="w-full border-b-2 border-[#8B3A3A] bg-transparent text-center font-mono text-xl tracking-widest uppercase outline-none py-2"
                type="text"
                autocomplete="off"
                value={game.input().to_string()}
                disabled={game.is_won()}
                {oninput}
            />
            <div class="h-1 bg-stone-200">
                <div class="h-full bg-[#8B3A3A] transition-all" style={format!("width: {pct}%;")}></div>
            </div>
            <p class="font-['Cormorant_Garamond'] italic text-stone-500">
                { format!("(Type \"{}\")", game.target()) }
            </p>
        </div>
    }
}
