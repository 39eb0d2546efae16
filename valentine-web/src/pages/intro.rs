use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IntroPageProps {
    pub line: AttrValue,
    pub is_last: bool,
    pub on_next: Callback<()>,
}

/// Full-screen narration; any click advances one line.
#[function_component(IntroPage)]
pub fn intro_page(props: &IntroPageProps) -> Html {
    let on_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let line_class = if props.is_last {
        "text-[#8B3A3A] italic"
    } else {
        "text-stone-100"
    };

    html! {
        <div
            id="intro"
            class="fixed inset-0 bg-[#0a0a0a] text-stone-200 z-[100] flex flex-col items-center justify-center cursor-pointer overflow-hidden"
            onclick={on_click}
        >
            <div class="text-center px-8 relative z-10">
                <p class={classes!("font-['Playfair_Display']", "text-3xl", "md:text-5xl", "leading-tight", line_class)}>
                    { props.line.clone() }
                </p>
            </div>
        </div>
    }
}
