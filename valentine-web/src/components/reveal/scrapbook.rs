use yew::prelude::*;

use super::{LayoutProps, Polaroid, Tape};

#[function_component(ScrapbookReveal)]
pub fn scrapbook_reveal(p: &LayoutProps) -> Html {
    let c = &p.content;
    html! {
        <div class="scrapbook-reveal relative w-full flex flex-col items-center justify-center p-8">
            <div class="absolute w-80 h-96 bg-[#f0f0f0] shadow-xl -rotate-2"></div>
            <div class="absolute w-80 h-96 bg-white shadow-xl rotate-3"></div>
            <div class="relative z-10 flex flex-col md:flex-row items-center gap-12">
                <div class="relative">
                    <Tape class={classes!("-top-4", "-left-4", "-rotate-45")} />
                    <Tape class={classes!("-bottom-4", "-right-4", "-rotate-45")} />
                    <Polaroid color={c.theme.clone()} rotation="-2deg" caption={AttrValue::from(c.note.clone())}>
                        <div class="w-full h-full flex items-center justify-center bg-stone-100 text-5xl text-stone-300">{ "♥" }</div>
                    </Polaroid>
                </div>
                <div class="max-w-xs">
                    <h2 class="font-['Homemade_Apple'] text-3xl mb-6 text-[#8B3A3A] font-bold">{ c.title.clone() }</h2>
                    <p class="font-['Noto_Sans_Devanagari'] text-2xl leading-snug text-stone-800">{ c.message.clone() }</p>
                </div>
            </div>
        </div>
    }
}
