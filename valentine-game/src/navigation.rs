//! Which screen is showing, which day is active, and which days are done.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::DayId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Intro,
    Menu,
    Game,
    Reveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
}

impl Transition {
    #[must_use]
    pub const fn stay(view: View) -> Self {
        Self {
            from: view,
            to: view,
        }
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Side effect a transition asks the caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Start background music; the triggering click counts as the unlock gesture.
    BeginAudio,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    view: View,
    active_day: Option<DayId>,
    completed: BTreeSet<DayId>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn active_day(&self) -> Option<DayId> {
        self.active_day
    }

    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<DayId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, id: DayId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn all_completed(&self, total: usize) -> bool {
        self.completed.len() >= total
    }

    fn go(&mut self, to: View) -> Transition {
        let from = self.view;
        self.view = to;
        if from != to {
            log::debug!("nav: {from:?} -> {to:?} (day {:?})", self.active_day);
        }
        Transition { from, to }
    }

    /// Leave the intro. Only the first call from `Intro` has an effect.
    pub fn complete_intro(&mut self) -> Option<NavEffect> {
        if self.view != View::Intro {
            return None;
        }
        self.go(View::Menu);
        Some(NavEffect::BeginAudio)
    }

    /// Open a day: its reveal when already completed, otherwise its game.
    /// Only legal from the menu.
    pub fn select_day(&mut self, id: DayId) -> Transition {
        if self.view != View::Menu {
            log::debug!("nav: ignoring select of day {id} from {:?}", self.view);
            return Transition::stay(self.view);
        }
        self.active_day = Some(id);
        if self.is_completed(id) {
            self.go(View::Reveal)
        } else {
            self.go(View::Game)
        }
    }

    /// Record a win for `id` and show its reveal. Repeats are harmless; a win
    /// for any day other than the active one is dropped.
    pub fn report_win(&mut self, id: DayId) -> Transition {
        if self.active_day != Some(id) || !matches!(self.view, View::Game | View::Reveal) {
            log::debug!("nav: ignoring win for inactive day {id}");
            return Transition::stay(self.view);
        }
        if self.completed.insert(id) {
            log::debug!("nav: day {id} completed ({} total)", self.completed.len());
        }
        self.go(View::Reveal)
    }

    pub fn exit_to_menu(&mut self) -> Transition {
        if !matches!(self.view, View::Game | View::Reveal) {
            return Transition::stay(self.view);
        }
        self.active_day = None;
        self.go(View::Menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_menu() -> NavigationState {
        let mut nav = NavigationState::new();
        assert_eq!(nav.complete_intro(), Some(NavEffect::BeginAudio));
        nav
    }

    #[test]
    fn intro_completes_once() {
        let mut nav = at_menu();
        assert_eq!(nav.view(), View::Menu);
        assert_eq!(nav.complete_intro(), None);
    }

    #[test]
    fn fresh_day_opens_its_game() {
        let mut nav = at_menu();
        let t = nav.select_day(DayId(3));
        assert_eq!((t.from, t.to), (View::Menu, View::Game));
        assert_eq!(nav.active_day(), Some(DayId(3)));
    }

    #[test]
    fn repeated_wins_record_once() {
        let mut nav = at_menu();
        nav.select_day(DayId(1));
        for _ in 0..3 {
            let t = nav.report_win(DayId(1));
            assert_eq!(t.to, View::Reveal);
        }
        assert_eq!(nav.completed_count(), 1);
        assert!(nav.is_completed(DayId(1)));
    }

    #[test]
    fn completed_day_routes_straight_to_reveal() {
        let mut nav = at_menu();
        nav.select_day(DayId(2));
        nav.report_win(DayId(2));
        nav.exit_to_menu();
        assert_eq!(nav.active_day(), None);
        assert_eq!(nav.select_day(DayId(2)).to, View::Reveal);
    }

    #[test]
    fn late_win_for_another_day_is_ignored() {
        let mut nav = at_menu();
        nav.select_day(DayId(4));
        nav.exit_to_menu();
        nav.select_day(DayId(5));
        let t = nav.report_win(DayId(4));
        assert!(!t.changed());
        assert_eq!(nav.view(), View::Game);
        assert!(!nav.is_completed(DayId(4)));
    }

    #[test]
    fn selecting_during_intro_is_ignored() {
        let mut nav = NavigationState::new();
        assert!(!nav.select_day(DayId(1)).changed());
        assert_eq!(nav.view(), View::Intro);
        assert_eq!(nav.active_day(), None);
        assert_eq!(nav.complete_intro(), Some(NavEffect::BeginAudio));
    }

    #[test]
    fn selecting_from_a_running_game_is_ignored() {
        let mut nav = at_menu();
        nav.select_day(DayId(1));
        let t = nav.select_day(DayId(2));
        assert_eq!((t.from, t.to), (View::Game, View::Game));
        assert_eq!(nav.active_day(), Some(DayId(1)));
    }

    #[test]
    fn exit_is_only_legal_from_day_views() {
        let mut nav = NavigationState::new();
        assert!(!nav.exit_to_menu().changed());
        assert_eq!(nav.view(), View::Intro);
    }

    #[test]
    fn completion_is_monotonic() {
        let mut nav = at_menu();
        for day in 1..=8 {
            nav.select_day(DayId(day));
            nav.report_win(DayId(day));
            nav.exit_to_menu();
            assert_eq!(nav.completed_count(), usize::from(day));
        }
        assert!(nav.all_completed(8));
    }
}
