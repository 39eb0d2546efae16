use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub playing: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(MusicToggle)]
pub fn music_toggle(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            // Toggling unlocks playback itself; the root handler is not needed.
            e.stop_propagation();
            cb.emit(());
        })
    };
    let (glyph, label) = if p.playing {
        ("🔊", "Mute music")
    } else {
        ("🔇", "Play music")
    };
    html! {
        <button
            class="music-toggle fixed bottom-6 right-6 z-[200] w-12 h-12 rounded-full bg-white/80 shadow-lg flex items-center justify-center text-xl"
            aria-label={label}
            aria-pressed={p.playing.to_string()}
            onclick={onclick}
        >
            { glyph }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn label_follows_playback_state() {
        let html = block_on(
            LocalServerRenderer::<MusicToggle>::with_props(Props {
                playing: true,
                on_toggle: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("Mute music"));
        assert!(html.contains("aria-pressed=\"true\""));
    }
}
