use yew::prelude::*;

use super::LayoutProps;

#[function_component(ChocolateReveal)]
pub fn chocolate_reveal(p: &LayoutProps) -> Html {
    let c = &p.content;
    html! {
        <div class="chocolate-reveal relative w-full max-w-2xl p-8 bg-[#3E2723] rounded-sm shadow-2xl flex flex-col items-center text-[#EFEBE9]">
            <div class="absolute top-4 left-4 w-full h-full border border-[#8D6E63] pointer-events-none"></div>
            <div class="text-center space-y-6">
                <div class="font-['Playfair_Display'] text-5xl tracking-widest text-[#D7CCC8] uppercase border-b border-[#5D4037] pb-4 inline-block">
                    { c.title.clone() }
                </div>
                <p class="font-['Noto_Sans_Devanagari'] text-xl leading-relaxed max-w-md">{ c.message.clone() }</p>
                <div class="bg-white p-2 pb-6 shadow-lg rotate-3 max-w-xs mx-auto text-stone-800 mt-8">
                    <div class="aspect-square bg-stone-200 mb-2 flex items-center justify-center text-6xl">{ "🍫" }</div>
                    <p class="font-['Reenie_Beanie'] text-xl text-center">{ "Tu majhi Treat aahes." }</p>
                </div>
            </div>
        </div>
    }
}
