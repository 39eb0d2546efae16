pub mod intro;
pub mod menu;
pub mod reveal;
pub mod stage;
