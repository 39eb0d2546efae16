//! Executes controller commands against a single `HtmlAudioElement`.
use std::rc::Rc;

use valentine_game::AudioCommand;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

use crate::dom::js_error_message;

/// Called with the browser's reason when `play()` is refused.
pub type RejectHandler = Rc<dyn Fn(String)>;

pub struct MediaBackend {
    element: HtmlAudioElement,
    on_rejected: RejectHandler,
}

impl MediaBackend {
    /// Create the element. Returns `None` outside a browser.
    #[must_use]
    pub fn new(on_rejected: RejectHandler) -> Option<Self> {
        match HtmlAudioElement::new() {
            Ok(element) => Some(Self {
                element,
                on_rejected,
            }),
            Err(err) => {
                log::warn!("audio element unavailable: {}", js_error_message(&err));
                None
            }
        }
    }

    pub fn run(&self, commands: &[AudioCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    fn apply(&self, command: &AudioCommand) {
        match command {
            AudioCommand::Pause => {
                if let Err(err) = self.element.pause() {
                    log::debug!("pause failed: {}", js_error_message(&err));
                }
            }
            AudioCommand::SetSource(url) => {
                self.element.set_src(url);
                self.element.load();
            }
            AudioCommand::SetVolume(volume) => self.element.set_volume(f64::from(*volume)),
            AudioCommand::Play => match self.element.play() {
                Ok(promise) => {
                    let on_rejected = Rc::clone(&self.on_rejected);
                    spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            on_rejected(js_error_message(&err));
                        }
                    });
                }
                Err(err) => (self.on_rejected)(js_error_message(&err)),
            },
        }
    }
}
