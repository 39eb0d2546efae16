//! Reveal layouts and the scrapbook pieces they are built from.
use yew::prelude::*;

use crate::game::RevealContent;

pub mod chocolate;
pub mod letter;
pub mod propose;
pub mod rose;
pub mod scrapbook;

#[derive(Properties, PartialEq, Clone)]
pub struct LayoutProps {
    pub content: RevealContent,
}

#[derive(Properties, PartialEq, Clone)]
pub struct TapeProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Tape)]
pub fn tape(p: &TapeProps) -> Html {
    html! {
        <div class={classes!("tape", "absolute", "w-24", "h-8", "bg-[#fdfbf7]/80", "shadow-sm", "z-20", p.class.clone())}>
            <div class="w-full h-full opacity-40 bg-stone-200 border-x border-white/50"></div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PolaroidProps {
    /// Background colour class for the photo area.
    pub color: AttrValue,
    /// CSS rotation, e.g. `-2deg`.
    pub rotation: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Polaroid)]
pub fn polaroid(p: &PolaroidProps) -> Html {
    html! {
        <div
            class={classes!("polaroid", "bg-white", "p-3", "pb-10", "shadow-xl", "shrink-0", "relative", "z-10", p.class.clone())}
            style={format!("transform: rotate({});", p.rotation)}
        >
            <div class={classes!("w-full", "aspect-[4/5]", "overflow-hidden", "relative", p.color.to_string())}>
                { for p.children.iter() }
            </div>
            if let Some(caption) = p.caption.clone() {
                <div class="absolute bottom-2 inset-x-0 text-center font-['Reenie_Beanie'] text-2xl text-stone-800">
                    { caption }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PaperProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Ruled notebook sheet with a margin line.
#[function_component(LinedPaper)]
pub fn lined_paper(p: &PaperProps) -> Html {
    html! {
        <div class={classes!("lined-paper", "bg-[#fdfbf7]", "p-6", "shadow-md", "relative", "overflow-hidden", p.class.clone())}>
            <div
                class="absolute inset-0"
                style="background-image: repeating-linear-gradient(transparent, transparent 27px, #aebcc9 28px); background-position: 0 20px;"
            ></div>
            <div class="absolute left-8 inset-y-0 w-px bg-red-300/50"></div>
            <div class="relative z-10">{ for p.children.iter() }</div>
        </div>
    }
}

#[function_component(TornPaper)]
pub fn torn_paper(p: &PaperProps) -> Html {
    html! {
        <div
            class={classes!("torn-paper", "absolute", "bg-[#f4f1ea]", "p-6", "shadow-md", p.class.clone())}
            style="clip-path: polygon(0% 0%, 100% 2%, 98% 100%, 2% 98%);"
        >
            <div class="font-['Cormorant_Garamond'] italic text-stone-700 leading-relaxed text-center">
                { for p.children.iter() }
            </div>
        </div>
    }
}
