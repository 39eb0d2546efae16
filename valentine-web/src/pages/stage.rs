use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::components::games::engine_view;
use crate::game::{DayId, GameInput, MiniGame};

#[derive(Properties, Clone)]
pub struct StagePageProps {
    pub day: DayId,
    pub title: AttrValue,
    pub date: AttrValue,
    pub game: MiniGame,
    pub revision: u64,
    /// The engine is won and the success frame is being held.
    pub celebrating: bool,
    /// Driver period; `None` for engines that only react to input.
    pub interval: Option<u32>,
    pub on_input: Callback<GameInput>,
    pub on_tick: Callback<u32>,
    pub on_exit: Callback<()>,
}

impl PartialEq for StagePageProps {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day
            && self.revision == other.revision
            && self.celebrating == other.celebrating
            && self.interval == other.interval
            && self.on_input == other.on_input
            && self.on_tick == other.on_tick
            && self.on_exit == other.on_exit
    }
}

/// Overlay hosting the mounted engine. Owns the driver timer: it is created
/// per (day, period) and dropped when either changes or the page unmounts.
#[function_component(StagePage)]
pub fn stage_page(p: &StagePageProps) -> Html {
    let on_tick = use_mut_ref(|| p.on_tick.clone());
    *on_tick.borrow_mut() = p.on_tick.clone();

    use_effect_with((p.day, p.interval), move |(_, interval)| {
        let timer = (*interval).map(|ms| {
            let on_tick = Rc::clone(&on_tick);
            Interval::new(ms, move || {
                let cb = on_tick.borrow().clone();
                cb.emit(ms);
            })
        });
        move || drop(timer)
    });

    let on_close = {
        let cb = p.on_exit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let frame = classes!(
        "w-full",
        "max-w-lg",
        "bg-white",
        "p-8",
        "md:p-12",
        "shadow-2xl",
        "border",
        "relative",
        if p.celebrating { "border-[#D4AF37] celebrating" } else { "border-stone-100" },
    );

    html! {
        <div class="stage fixed inset-0 z-50 flex flex-col items-center justify-center p-4 bg-[#F7F5F0]/95 overflow-y-auto" data-day={p.day.to_string()}>
            <div class={frame}>
                <button class="exit absolute top-6 left-6 p-2 rounded-full text-stone-400 hover:bg-stone-50" aria-label="Close" onclick={on_close}>
                    { "✕" }
                </button>
                <div class="text-center mb-10">
                    <span class="font-['Cormorant_Garamond'] italic text-stone-500 text-lg">{ p.date.clone() }</span>
                    <h2 class="font-['Playfair_Display'] text-4xl mt-2">{ p.title.clone() }</h2>
                </div>
                { engine_view(&p.game, p.revision, &p.on_input) }
                <div class="mt-8 text-center">
                    <div class="w-8 h-px bg-stone-200 mx-auto mb-4"></div>
                    <p class="font-['Cormorant_Garamond'] text-stone-400 text-sm tracking-wide">{ "Purna karun athvan ughad" }</p>
                </div>
            </div>
        </div>
    }
}
