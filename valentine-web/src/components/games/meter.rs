use yew::prelude::*;

use super::EngineProps;
use crate::game::{GameInput, MeterGame, Mood};

const fn mood_line(mood: Mood) -> &'static str {
    match mood {
        Mood::Cold => "Thandi vajtey... Mithi mar na!",
        Mood::Cozy => "Ekdam Ubbdar... ❤️",
        Mood::TooTight => "Khup ghatt hotay!",
    }
}

#[function_component(MeterView)]
pub fn meter_view(p: &EngineProps<MeterGame>) -> Html {
    let game = &p.game;
    let onclick = {
        let cb = p.on_input.clone();
        Callback::from(move |_: MouseEvent| cb.emit(GameInput::Hug))
    };
    let (low, high) = game.band();
    let fill = match game.mood() {
        Mood::Cold => "bg-blue-300",
        Mood::Cozy => "bg-[#8B3A3A]",
        Mood::TooTight => "bg-red-800",
    };

    html! {
        <div class="meter-game flex flex-col items-center w-full select-none px-4">
            <div class="text-center mb-6 space-y-1">
                <p class="mood font-['Cormorant_Garamond'] text-xl font-bold tracking-widest text-stone-600 uppercase">
                    { mood_line(game.mood()) }
                </p>
                <p class="text-xs text-stone-400">{ "Heart la Red Zone madhe thev" }</p>
            </div>
            <div class="flex gap-8 items-end h-48 w-full max-w-xs justify-center">
                <div class="w-16 h-full bg-stone-200 rounded-full relative overflow-hidden border border-stone-300">
                    <div
                        class="absolute w-full bg-rose-100/50 z-10 border-y border-rose-200"
                        style={format!("bottom: {low:.0}%; height: {:.0}%;", high - low)}
                    ></div>
                    <div
                        class={classes!("absolute", "bottom-0", "w-full", fill)}
                        style={format!("height: {:.1}%;", game.warmth())}
                    ></div>
                    <span class="absolute inset-x-0 bottom-2 text-center text-white text-xs font-bold z-20">
                        { format!("{:.0}%", game.warmth()) }
                    </span>
                </div>
                <div class="h-full flex flex-col justify-end space-y-2">
                    <div class="w-4 h-full bg-stone-100 rounded-full overflow-hidden relative">
                        <div class="progress absolute bottom-0 w-full bg-green-500" style={format!("height: {:.1}%;", game.progress())}></div>
                    </div>
                    <span class="text-[10px] uppercase text-stone-400">{ "Pragati" }</span>
                </div>
            </div>
            <button
                class="hug mt-8 w-20 h-20 bg-[#8B3A3A] rounded-full shadow-lg flex items-center justify-center text-white text-3xl"
                aria-label="Hug"
                {onclick}
            >
                { "❤" }
            </button>
        </div>
    }
}
