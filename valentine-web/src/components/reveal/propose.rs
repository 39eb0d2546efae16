use yew::prelude::*;

use super::{LayoutProps, Polaroid, Tape};

/// "Then" and "now" side by side, with a pinned note underneath.
#[function_component(ProposeReveal)]
pub fn propose_reveal(p: &LayoutProps) -> Html {
    let c = &p.content;
    html! {
        <div class="propose-reveal flex flex-col items-center justify-center w-full max-w-4xl gap-8 p-4 relative">
            <div class="flex flex-wrap justify-center gap-6 relative">
                <Polaroid color="bg-stone-300" rotation="-3deg" caption={AttrValue::from("Day One")}>
                    <div class="w-full h-full flex items-center justify-center font-['Playfair_Display'] text-4xl opacity-20">{ "Tevha" }</div>
                </Polaroid>
                <Polaroid color="bg-stone-800" rotation="2deg" caption={AttrValue::from("Forever")}>
                    <div class="w-full h-full flex items-center justify-center font-['Playfair_Display'] text-4xl text-white opacity-20">{ "Atta" }</div>
                </Polaroid>
                <Tape class={classes!("top-0", "left-[45%]", "w-32")} />
            </div>
            <div class="bg-[#fff9c4] p-6 shadow-lg max-w-md w-full relative rotate-1">
                <div class="absolute -top-3 left-1/2 -translate-x-1/2 w-4 h-4 rounded-full bg-red-400 shadow-sm"></div>
                <h2 class="font-['Playfair_Display'] text-4xl text-center mb-4">{ c.title.clone() }</h2>
                <p class="font-['Noto_Sans_Devanagari'] text-xl text-center leading-relaxed italic">{ format!("\"{}\"", c.message) }</p>
                <div class="mt-6 text-center">
                    <span class="font-['Homemade_Apple'] text-2xl text-[#8B3A3A] border-b-2 border-[#8B3A3A]">{ "Ho, nehmich." }</span>
                </div>
            </div>
        </div>
    }
}
