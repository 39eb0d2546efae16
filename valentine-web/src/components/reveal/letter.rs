use yew::prelude::*;

use super::{LayoutProps, LinedPaper, Polaroid, Tape, TornPaper};

/// The closing letter, one line per row; blank lines become paragraph gaps.
#[function_component(LetterReveal)]
pub fn letter_reveal(p: &LayoutProps) -> Html {
    let c = &p.content;
    let lines = c.letter.iter().enumerate().map(|(i, line)| {
        if line.is_empty() {
            html! { <div key={i.to_string()} class="h-6"></div> }
        } else {
            html! { <div key={i.to_string()} class="letter-line">{ line.clone() }</div> }
        }
    });

    html! {
        <div class="letter-reveal relative w-full flex items-center justify-center p-4 bg-[#e8e4d9]">
            <div class="relative w-full max-w-5xl bg-[#FDFBF7] shadow-2xl p-4 md:p-12 flex flex-col md:flex-row gap-8 items-start justify-center">
                <Tape class={classes!("-top-4", "right-20", "rotate-3")} />
                if !c.letter_aside.is_empty() {
                    <TornPaper class={classes!("hidden", "md:block", "-top-4", "left-10", "rotate-[-4deg]", "max-w-[200px]", "z-20")}>
                        { format!("\"{}\"", c.letter_aside) }
                    </TornPaper>
                }
                <div class="relative w-full md:w-1/3 flex flex-col gap-8 mt-12 md:mt-0">
                    <Polaroid color="bg-stone-300" rotation="-6deg" caption={AttrValue::from("Day 1")}>
                        <div class="w-full h-full flex items-center justify-center opacity-30 text-4xl">{ "♥" }</div>
                    </Polaroid>
                    <Polaroid color="bg-stone-800" rotation="4deg" caption={AttrValue::from("Forever")} class={classes!("md:-ml-8", "md:-mt-12")}>
                        <div class="w-full h-full flex items-center justify-center text-white opacity-30 text-4xl">{ "★" }</div>
                    </Polaroid>
                </div>
                <div class="relative w-full md:w-2/3 mt-8 md:mt-12">
                    <LinedPaper class={classes!("rotate-1", "min-h-[600px]")}>
                        <div class="text-center mb-10 mt-4">
                            <h1 class="font-['Playfair_Display'] text-4xl md:text-5xl text-[#2A2A2A] mb-2">{ c.letter_heading.clone() }</h1>
                            <div class="w-16 h-[2px] bg-[#8B3A3A] mx-auto opacity-50"></div>
                        </div>
                        <div class="font-['Noto_Sans_Devanagari'] text-xl leading-[2.2rem] text-stone-800 px-2 md:px-6">
                            { for lines }
                        </div>
                        <p class="mt-16 text-right pr-8 font-['Homemade_Apple'] text-3xl text-[#8B3A3A] -rotate-2">
                            { c.signature.clone() }
                        </p>
                    </LinedPaper>
                </div>
            </div>
        </div>
    }
}
