use yew::prelude::*;

use crate::game::{DayDescriptor, DayId};

/// What a menu card needs from a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub id: DayId,
    pub date: AttrValue,
    pub title: AttrValue,
    pub glyph: AttrValue,
    pub theme: AttrValue,
    pub completed: bool,
}

impl DayCard {
    #[must_use]
    pub fn new(day: &DayDescriptor, completed: bool) -> Self {
        Self {
            id: day.id,
            date: AttrValue::from(day.date.clone()),
            title: AttrValue::from(day.title.clone()),
            glyph: AttrValue::from(day.icon.glyph()),
            theme: AttrValue::from(day.theme.clone()),
            completed,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MenuPageProps {
    pub cards: Vec<DayCard>,
    pub on_select: Callback<DayId>,
}

#[function_component(MenuPage)]
pub fn menu_page(props: &MenuPageProps) -> Html {
    let cards = props.cards.iter().map(|card| {
        let on_click = {
            let on_select = props.on_select.clone();
            let id = card.id;
            Callback::from(move |_: MouseEvent| on_select.emit(id))
        };
        let tint = if card.completed { "opacity-100" } else { "opacity-0" };
        let icon = if card.completed {
            "text-[#8B3A3A] scale-110"
        } else {
            "text-stone-300"
        };
        html! {
            <div key={card.id.to_string()} class="group cursor-pointer day-card" data-day={card.id.to_string()} onclick={on_click}>
                <div class="aspect-[3/4] bg-[#F5F5F0] relative overflow-hidden mb-6">
                    <div class={classes!("absolute", "inset-0", tint)}>
                        <div class={classes!("w-full", "h-full", "opacity-20", card.theme.to_string())}></div>
                    </div>
                    <div class="absolute inset-0 flex flex-col items-center justify-center p-6 text-center">
                        <span class={classes!("text-5xl", "mb-4", icon)}>{ card.glyph.clone() }</span>
                        if card.completed {
                            <span class="font-['Homemade_Apple'] text-[#8B3A3A] text-lg -rotate-6">{ "Ughadla" }</span>
                        }
                    </div>
                    <div class="absolute top-4 left-4 font-['Playfair_Display'] text-4xl text-stone-200 font-bold opacity-50">
                        { format!("0{}", card.id) }
                    </div>
                </div>
                <div class="text-center space-y-2">
                    <div class="text-[10px] tracking-[0.2em] uppercase text-stone-400 font-bold">{ card.date.clone() }</div>
                    <h4 class="font-['Playfair_Display'] text-2xl">{ card.title.clone() }</h4>
                </div>
            </div>
        }
    });

    html! {
        <div class="w-full bg-[#F7F5F0] pb-24">
            <nav class="flex justify-between items-center py-8 px-6 border-b border-stone-200/60">
                <div class="text-xs tracking-[0.2em] uppercase font-bold opacity-60">{ "2025" }</div>
                <div class="font-['Playfair_Display'] text-2xl font-semibold">
                    { "S " }<span class="text-[#8B3A3A] italic">{ "&" }</span>{ " JAYU💞" }
                </div>
                <div class="text-xs tracking-[0.2em] uppercase font-bold opacity-60">{ "Kayamche Sobat" }</div>
            </nav>
            <header class="text-center py-20 space-y-4">
                <span class="font-['Cormorant_Garamond'] italic text-3xl text-[#8B3A3A]">{ "Majhya priya Jayu sathi" }</span>
                <h1 class="font-['Playfair_Display'] text-6xl tracking-tighter">{ "APLI PREM KATHA" }</h1>
                <p class="font-['Cormorant_Garamond'] text-xl text-stone-600">
                    { "Fakt majhya Jayu sathi banavlele kahi khas kshan ani athvani." }
                </p>
            </header>
            <div class="text-center mb-16">
                <span class="font-['Cormorant_Garamond'] italic text-2xl text-[#8B3A3A]">{ "The Collection" }</span>
                <h2 class="font-['Playfair_Display'] text-5xl text-[#1A1A1A]">{ "Aple Saat Divas" }</h2>
            </div>
            <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-x-8 gap-y-16 max-w-7xl mx-auto px-4">
                { for cards }
            </section>
            <footer class="py-24 text-center">
                <p class="font-['Cormorant_Garamond'] italic text-xl text-stone-500">{ "Jayu sathi premne banavlele" }</p>
            </footer>
        </div>
    }
}
