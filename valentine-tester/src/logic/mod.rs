pub mod autoplay;
pub mod reports;
pub mod tester;

pub use autoplay::{play_to_win, session_at_menu};
pub use tester::{LogicTester, ScenarioResult};
