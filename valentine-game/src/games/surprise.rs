/// The last day's one-tap unwrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleClickGame {
    activated: bool,
}

impl SingleClickGame {
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        true
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.activated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tap_wins_and_repeats_are_ignored() {
        let mut game = SingleClickGame::default();
        assert!(!game.is_won());
        assert!(game.activate());
        assert!(game.is_won());
        assert!(!game.activate());
    }
}
