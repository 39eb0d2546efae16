use yew::prelude::*;

use crate::components::reveal::chocolate::ChocolateReveal;
use crate::components::reveal::letter::LetterReveal;
use crate::components::reveal::propose::ProposeReveal;
use crate::components::reveal::rose::RoseReveal;
use crate::components::reveal::scrapbook::ScrapbookReveal;
use crate::game::{RevealContent, RevealLayout};

#[derive(Properties, Clone, PartialEq)]
pub struct RevealPageProps {
    pub content: RevealContent,
    pub on_back: Callback<()>,
}

#[function_component(RevealPage)]
pub fn reveal_page(p: &RevealPageProps) -> Html {
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let content = p.content.clone();
    let layout = match p.content.layout {
        RevealLayout::RosePolaroid => html! { <RoseReveal {content} /> },
        RevealLayout::ProposeDiptych => html! { <ProposeReveal {content} /> },
        RevealLayout::ChocolateBox => html! { <ChocolateReveal {content} /> },
        RevealLayout::FinalLetter => html! { <LetterReveal {content} /> },
        RevealLayout::Scrapbook => html! { <ScrapbookReveal {content} /> },
    };

    html! {
        <div class="reveal fixed inset-0 z-50 overflow-y-auto bg-[#E5E0D8]" data-day={p.content.day.to_string()}>
            <div class="w-full flex items-center p-8 fixed top-0 inset-x-0 z-[100] pointer-events-none">
                <button
                    class="back pointer-events-auto flex items-center gap-2 bg-white px-6 py-3 rounded-full shadow-md border border-stone-200"
                    onclick={on_back}
                >
                    <span aria-hidden="true">{ "↺" }</span>
                    <span class="text-xs uppercase tracking-widest font-bold text-stone-600">{ "Alabm Band Kara" }</span>
                </button>
            </div>
            <div class="flex items-center justify-center w-full min-h-screen px-4 py-24">
                { layout }
            </div>
        </div>
    }
}
