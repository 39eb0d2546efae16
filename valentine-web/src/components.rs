pub mod games;
pub mod load_error;
pub mod music_toggle;
pub mod reveal;
