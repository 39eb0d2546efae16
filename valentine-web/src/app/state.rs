use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;

use crate::audio::MediaBackend;
use crate::game::{AudioCommand, CatalogError, Showcase, session_seed};

/// Shared handle to the session. Every mutation goes through [`AppState::dispatch`],
/// which runs the resulting audio commands and re-renders the app.
#[derive(Clone)]
pub struct AppState {
    session: Rc<RefCell<Result<Showcase, CatalogError>>>,
    backend: Rc<RefCell<Option<MediaBackend>>>,
    revision: Rc<Cell<u64>>,
    refresh: UseForceUpdateHandle,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = use_mut_ref(|| {
        Showcase::from_static(session_seed()).inspect_err(|err| {
            log::error!("day catalog failed to load: {err}");
        })
    });
    let backend = use_mut_ref(|| None::<MediaBackend>);
    let revision = use_memo((), |()| Cell::new(0_u64));
    let refresh = use_force_update();

    {
        let session = session.clone();
        let backend = backend.clone();
        use_effect_with((), move |()| {
            let reject_session = session.clone();
            let created = MediaBackend::new(Rc::new(move |reason: String| {
                if let Ok(show) = reject_session.borrow().as_ref() {
                    show.audio().on_play_rejected(&reason);
                }
            }));
            if let (Some(media), Ok(show)) = (created.as_ref(), session.borrow().as_ref()) {
                media.run(&show.audio().initial_commands());
            }
            *backend.borrow_mut() = created;
            || {}
        });
    }

    AppState {
        session,
        backend,
        revision,
        refresh,
    }
}

impl AppState {
    /// Read the session; `None` when the catalog failed to load.
    pub fn with<R>(&self, read: impl FnOnce(&Showcase) -> R) -> Option<R> {
        self.session.borrow().as_ref().ok().map(read)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<String> {
        self.session.borrow().as_ref().err().map(ToString::to_string)
    }

    /// Bumped on every dispatch; views compare it instead of engine state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Mutate the session, execute returned audio commands, then re-render.
    pub fn dispatch(&self, action: impl FnOnce(&mut Showcase) -> Vec<AudioCommand>) {
        let commands = match self.session.borrow_mut().as_mut() {
            Ok(show) => action(show),
            Err(_) => return,
        };
        if !commands.is_empty()
            && let Some(media) = self.backend.borrow().as_ref()
        {
            media.run(&commands);
        }
        self.revision.set(self.revision.get().wrapping_add(1));
        self.refresh.force_update();
    }

    /// Mutate the session without audio side effects.
    pub fn update(&self, action: impl FnOnce(&mut Showcase)) {
        self.dispatch(|show| {
            action(show);
            Vec::new()
        });
    }
}
