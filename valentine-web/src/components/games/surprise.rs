use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, SingleClickGame};

/// Sealed envelope; one click opens the final day.
#[function_component(SurpriseView)]
pub fn surprise_view(p: &EngineProps<SingleClickGame>) -> Html {
    let onclick = {
        let cb = p.on_input.clone();
        Callback::from(move |_: MouseEvent| cb.emit(GameInput::Activate))
    };
    html! {
        <div class="surprise-game flex flex-col items-center justify-center h-80 w-full cursor-pointer" {onclick}>
            <div class="w-56 h-40 bg-[#8B3A3A] rounded-lg shadow-2xl flex items-center justify-center animate-bounce">
                <div class="w-12 h-12 rounded-full bg-red-950 shadow-lg flex items-center justify-center border-2 border-red-800/50 text-red-900/50">
                    { "❤" }
                </div>
            </div>
            <div class="mt-12 text-center space-y-2">
                <h3 class="font-['Playfair_Display'] text-2xl">{ "Jayu sathi patra" }</h3>
                <p class="font-['Cormorant_Garamond'] italic text-lg text-stone-400 animate-pulse">{ "Ughadun tar bagh..." }</p>
            </div>
        </div>
    }
}
