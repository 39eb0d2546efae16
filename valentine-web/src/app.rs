use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::components::load_error::LoadError;
use crate::components::music_toggle::MusicToggle;
use crate::game::{DayId, GameInput, Showcase, View};
use crate::pages::intro::IntroPage;
use crate::pages::menu::{DayCard, MenuPage};
use crate::pages::reveal::RevealPage;
use crate::pages::stage::StagePage;

pub mod state;

pub use state::{AppState, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();

    let fade_interval = state
        .with(|show| show.audio().tick_interval_ms())
        .flatten();
    {
        let state = state.clone();
        use_effect_with(fade_interval, move |interval| {
            let timer = (*interval).map(|ms| {
                Interval::new(ms, move || state.dispatch(|show| show.advance_audio(ms)))
            });
            move || drop(timer)
        });
    }

    if let Some(message) = state.load_error() {
        return html! { <LoadError message={message} /> };
    }

    let on_gesture = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Showcase::unlock_audio))
    };
    let on_touch = {
        let state = state.clone();
        Callback::from(move |_: TouchEvent| state.dispatch(Showcase::unlock_audio))
    };
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(Showcase::toggle_audio))
    };
    let playing = state
        .with(|show| show.audio().is_playing())
        .unwrap_or(false);
    let body = state
        .with(|show| render_view(show, &state))
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-[#F7F5F0] text-[#2A2A2A]" onclick={on_gesture} ontouchstart={on_touch}>
            { body }
            <MusicToggle playing={playing} on_toggle={on_toggle} />
        </div>
    }
}

fn render_view(show: &Showcase, state: &AppState) -> Html {
    match show.nav().view() {
        View::Intro => {
            let intro = show.intro();
            let line = show
                .story()
                .intro
                .get(intro.index())
                .cloned()
                .unwrap_or_default();
            let on_next = {
                let state = state.clone();
                Callback::from(move |()| state.dispatch(Showcase::advance_intro))
            };
            html! {
                <IntroPage
                    line={AttrValue::from(line)}
                    is_last={intro.is_last()}
                    on_next={on_next}
                />
            }
        }
        View::Menu => {
            let cards: Vec<DayCard> = show
                .catalog()
                .days()
                .iter()
                .map(|day| DayCard::new(day, show.nav().is_completed(day.id)))
                .collect();
            let on_select = {
                let state = state.clone();
                Callback::from(move |id: DayId| {
                    state.update(|show| {
                        show.select_day(id);
                    });
                })
            };
            html! { <MenuPage cards={cards} on_select={on_select} /> }
        }
        View::Game => {
            let (Some(day), Some(stage)) = (show.active_day(), show.stage()) else {
                return Html::default();
            };
            let on_input = {
                let state = state.clone();
                Callback::from(move |input: GameInput| {
                    state.update(|show| {
                        show.input(&input);
                    });
                })
            };
            let on_tick = {
                let state = state.clone();
                Callback::from(move |elapsed: u32| state.update(|show| show.advance(elapsed)))
            };
            let on_exit = {
                let state = state.clone();
                Callback::from(move |()| {
                    state.update(|show| {
                        show.exit_to_menu();
                    });
                })
            };
            html! {
                <StagePage
                    day={day.id}
                    title={AttrValue::from(day.title.clone())}
                    date={AttrValue::from(day.date.clone())}
                    game={stage.game.clone()}
                    revision={state.revision()}
                    celebrating={show.is_celebrating()}
                    interval={show.tick_interval_ms()}
                    on_input={on_input}
                    on_tick={on_tick}
                    on_exit={on_exit}
                />
            }
        }
        View::Reveal => {
            let Some(content) = show.reveal() else {
                return Html::default();
            };
            let on_back = {
                let state = state.clone();
                Callback::from(move |()| {
                    state.update(|show| {
                        show.exit_to_menu();
                    });
                })
            };
            html! { <RevealPage content={content} on_back={on_back} /> }
        }
    }
}
