use yew::prelude::*;

use super::{LayoutProps, LinedPaper, Polaroid, Tape};

#[function_component(RoseReveal)]
pub fn rose_reveal(p: &LayoutProps) -> Html {
    let c = &p.content;
    html! {
        <div class="rose-reveal relative w-full max-w-4xl flex flex-col md:flex-row items-center justify-center p-8 gap-12">
            <div class="relative">
                <Tape class={classes!("-top-3", "left-12", "-rotate-3")} />
                <Polaroid color={c.theme.clone()} rotation="-2deg" caption={AttrValue::from("Majhya Sunder Ful")}>
                    <div class="w-full h-full bg-rose-900/20 flex items-center justify-center text-7xl opacity-40">{ "🌹" }</div>
                </Polaroid>
            </div>
            <div class="max-w-sm relative">
                <LinedPaper class={classes!("rotate-1")}>
                    <h2 class="font-['Playfair_Display'] text-3xl mb-4 text-[#8B3A3A] font-bold">{ c.title.clone() }</h2>
                    <p class="font-['Noto_Sans_Devanagari'] text-xl leading-loose text-stone-800">{ c.message.clone() }</p>
                    <p class="font-['Homemade_Apple'] text-sm mt-6 text-right text-stone-500">{ format!("- {}", c.signature) }</p>
                </LinedPaper>
                <Tape class={classes!("-top-2", "-right-2", "rotate-45")} />
            </div>
        </div>
    }
}
