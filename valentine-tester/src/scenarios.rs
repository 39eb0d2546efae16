//! Named checks the tester can run against the core.
//!
//! Each scenario takes one iteration seed and either returns `Ok(())` or the
//! first violated property as an error.
use anyhow::{Context, Result, bail, ensure};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use valentine_game::{
    AudioCommand, CatchGame, DayId, GameInput, ItemKind, MiniGame, NavigationState, TuningConfig,
    View,
};

use crate::logic::{play_to_win, session_at_menu};

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: fn(u64) -> Result<()>,
}

pub const ALL: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Win every day in order and finish with all days completed",
        run: smoke,
    },
    Scenario {
        key: "idempotent-win",
        description: "Repeated win signals record a day once",
        run: idempotent_win,
    },
    Scenario {
        key: "revisit-completed",
        description: "A completed day opens its reveal with no game mounted",
        run: revisit_completed,
    },
    Scenario {
        key: "catch-bounds",
        description: "Catch score never passes the target and freezes on win",
        run: catch_bounds,
    },
    Scenario {
        key: "meter-bounds",
        description: "Meter progress stays in range and the win fires once",
        run: meter_bounds,
    },
    Scenario {
        key: "memory-hide",
        description: "Mismatched cards hide together and block reveals meanwhile",
        run: memory_hide,
    },
    Scenario {
        key: "unmount-timers",
        description: "Nothing advances after leaving a running game",
        run: unmount_timers,
    },
    Scenario {
        key: "audio-tracks",
        description: "Music follows the menu and day tracks with escaped URLs",
        run: audio_tracks,
    },
];

pub fn find(key: &str) -> Option<&'static Scenario> {
    ALL.iter().find(|s| s.key == key)
}

pub fn list() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALL.iter().map(|s| (s.key, s.description))
}

fn smoke(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let ids: Vec<DayId> = show.catalog().ids().collect();
    for id in ids {
        show.select_day(id);
        ensure!(show.nav().view() == View::Game, "day {id} did not open its game");
        play_to_win(&mut show).with_context(|| format!("playing day {id}"))?;
        ensure!(show.nav().view() == View::Reveal, "day {id} won without a reveal");
        ensure!(show.reveal().is_some(), "day {id} has no reveal content");
        show.exit_to_menu();
    }
    let total = show.catalog().len();
    ensure!(
        show.nav().all_completed(total),
        "only {} of {total} days completed",
        show.nav().completed_count()
    );
    Ok(())
}

fn idempotent_win(seed: u64) -> Result<()> {
    let mut nav = NavigationState::new();
    nav.complete_intro();
    let day = DayId(u8::try_from(seed % 8).unwrap_or(0) + 1);
    nav.select_day(day);
    for _ in 0..3 {
        nav.report_win(day);
    }
    ensure!(nav.completed_count() == 1, "repeated wins recorded more than once");

    let mut show = session_at_menu(seed)?;
    show.select_day(DayId(8));
    ensure!(show.input(&GameInput::Activate), "first activation was rejected");
    ensure!(
        !show.input(&GameInput::Activate),
        "second activation reached an unmounted game"
    );
    ensure!(show.nav().completed_count() == 1, "surprise day recorded twice");
    Ok(())
}

fn revisit_completed(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let day = DayId(u8::try_from(seed % 8).unwrap_or(0) + 1);
    show.select_day(day);
    play_to_win(&mut show)?;
    show.exit_to_menu();

    let transition = show.select_day(day);
    ensure!(transition.to == View::Reveal, "completed day {day} reopened its game");
    ensure!(show.game().is_none(), "completed day {day} mounted an engine");
    ensure!(show.tick_interval_ms().is_none(), "reveal left a timer running");
    ensure!(show.reveal().is_some(), "reveal content missing for day {day}");
    Ok(())
}

fn catch_bounds(seed: u64) -> Result<()> {
    let tuning = TuningConfig::load_from_static();
    let mut game = CatchGame::new(tuning.catch.clone(), seed);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let target = game.target_score();

    for _ in 0..100_000 {
        if game.is_won() {
            break;
        }
        let chase = game
            .items()
            .iter()
            .filter(|i| i.kind == ItemKind::Rose)
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|i| i.x);
        let x = match chase {
            Some(x) if rng.gen_bool(0.7) => x,
            _ => rng.gen_range(-20.0..120.0_f32),
        };
        game.move_catcher(x);
        ensure!(
            (tuning.catch.catcher_min..=tuning.catch.catcher_max).contains(&game.catcher_x()),
            "catcher escaped the field at {}",
            game.catcher_x()
        );
        game.advance(tuning.catch.tick_ms);
        ensure!(game.score() <= target, "score {} passed target {target}", game.score());
    }
    if !game.is_won() {
        bail!("catch game not won; score {}/{target}", game.score());
    }
    ensure!(game.score() == target, "won at {} instead of {target}", game.score());

    let frozen = game.items().to_vec();
    game.spawn_at(game.catcher_x(), ItemKind::Rose);
    game.advance(tuning.catch.tick_ms * 50);
    game.move_catcher(game.catcher_x() + 1.0);
    ensure!(game.score() == target, "score moved after the win");
    ensure!(
        game.items().len() == frozen.len() + 1,
        "items kept falling after the win"
    );
    Ok(())
}

fn meter_bounds(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let tick = show.tuning().meter.tick_ms;
    show.select_day(DayId(6));

    let mut steps = 0_u32;
    while show.nav().view() == View::Game {
        steps += 1;
        if steps > 200_000 {
            bail!("meter game not won after {steps} ticks");
        }
        let Some(MiniGame::Meter(game)) = show.game() else {
            bail!("day 6 did not mount the meter engine");
        };
        ensure!(
            (0.0..=100.0).contains(&game.progress()),
            "progress left range: {}",
            game.progress()
        );
        ensure!(
            (0.0..=100.0).contains(&game.warmth()),
            "warmth left range: {}",
            game.warmth()
        );
        // Bias towards the band so runs finish, with random overshoots.
        let hug = if game.warmth() < 70.0 {
            rng.gen_bool(0.6)
        } else {
            rng.gen_bool(0.05)
        };
        if hug {
            show.input(&GameInput::Hug);
        }
        show.advance(tick);
    }
    ensure!(show.nav().view() == View::Reveal, "meter win did not reveal");
    ensure!(show.nav().completed_count() == 1, "meter win recorded twice");
    ensure!(!show.input(&GameInput::Hug), "hug accepted after the win");
    show.advance(tick * 100);
    ensure!(show.nav().completed_count() == 1, "late ticks recorded a win");
    Ok(())
}

fn memory_hide(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let delay = show.tuning().memory.hide_delay_ms;
    show.select_day(DayId(3));

    let Some(MiniGame::Memory(game)) = show.game() else {
        bail!("day 3 did not mount the memory engine");
    };
    let (a, b) = (1..game.len())
        .find(|&j| game.symbol(0) != game.symbol(j))
        .map(|j| (0, j))
        .context("deck has no mismatching pair")?;
    let third = (1..game.len())
        .find(|&k| k != b)
        .context("deck too small")?;

    show.input(&GameInput::RevealCard(a));
    show.input(&GameInput::RevealCard(b));
    let Some(MiniGame::Memory(game)) = show.game() else {
        bail!("memory engine unmounted mid-turn");
    };
    ensure!(game.is_checking(), "mismatch did not start the hide delay");
    ensure!(
        !show.input(&GameInput::RevealCard(third)),
        "reveal accepted while checking"
    );

    show.advance(delay.saturating_sub(1));
    let Some(MiniGame::Memory(game)) = show.game() else {
        bail!("memory engine unmounted mid-delay");
    };
    ensure!(game.flipped().len() == 2, "cards hid before the delay ran out");

    show.advance(1);
    let Some(MiniGame::Memory(game)) = show.game() else {
        bail!("memory engine unmounted after the delay");
    };
    ensure!(game.flipped().is_empty(), "cards still face up after the delay");
    ensure!(!game.is_won(), "mismatch alone won the game");

    play_to_win(&mut show)?;
    ensure!(show.nav().is_completed(DayId(3)), "matching every pair did not win");
    Ok(())
}

fn unmount_timers(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let timed = [DayId(1), DayId(3), DayId(4), DayId(6), DayId(7)];
    let day = timed[rng.gen_range(0..timed.len())];

    show.select_day(day);
    ensure!(show.tick_interval_ms().is_some(), "day {day} has no driver timer");
    show.advance(rng.gen_range(0..2_000));
    show.exit_to_menu();

    ensure!(show.tick_interval_ms().is_none(), "timer survived the exit");
    ensure!(show.game().is_none(), "engine survived the exit");
    show.advance(60_000);
    ensure!(show.nav().view() == View::Menu, "time moved the menu");
    ensure!(show.nav().completed_count() == 0, "unmounted game recorded a win");
    Ok(())
}

fn audio_tracks(seed: u64) -> Result<()> {
    let mut show = session_at_menu(seed)?;
    let menu = show.catalog().menu_track.clone();
    ensure!(show.audio().is_playing(), "music did not start after the intro");
    ensure!(show.audio().target() == &menu, "menu track not requested");
    let commands = drain_fade(&mut show)?;
    ensure!(show.audio().current() == &menu, "menu track not current after the fade");
    if menu != show.catalog().intro_track {
        ensure!(
            commands.contains(&AudioCommand::SetSource(menu.url())),
            "menu track never loaded"
        );
    }

    let day = DayId(u8::try_from(seed % 8).unwrap_or(0) + 1);
    show.select_day(day);
    let track = show
        .catalog()
        .get(day)
        .map(|d| d.track.clone())
        .context("day missing from catalog")?;
    ensure!(show.audio().target() == &track, "day {day} track not requested");
    let commands = drain_fade(&mut show)?;
    if track != menu {
        ensure!(
            commands.contains(&AudioCommand::SetSource(track.url())),
            "day {day} track never loaded"
        );
    }
    ensure!(!track.url().contains(' '), "track URL left unescaped");

    show.exit_to_menu();
    ensure!(show.audio().target() == &menu, "exit did not return to the menu track");
    Ok(())
}

fn drain_fade(show: &mut valentine_game::Showcase) -> Result<Vec<AudioCommand>> {
    let mut commands = Vec::new();
    for _ in 0..10_000 {
        let Some(ms) = show.audio().tick_interval_ms() else {
            return Ok(commands);
        };
        commands.extend(show.advance_audio(ms));
    }
    bail!("audio fade never settled")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keys_are_unique_and_findable() {
        for (key, _) in list() {
            assert_eq!(ALL.iter().filter(|s| s.key == key).count(), 1, "{key}");
            assert!(find(key).is_some());
        }
        assert!(find("nope").is_none());
    }

    #[test]
    fn audio_tracks_hold_for_every_day() {
        // Seeds 0..8 pick each day once; the intro and menu share a track.
        for seed in 0..8 {
            audio_tracks(seed).unwrap_or_else(|err| panic!("seed {seed}: {err:#}"));
        }
    }

    #[test]
    fn every_scenario_passes_for_a_fixed_seed() {
        for scenario in ALL {
            (scenario.run)(1337).unwrap_or_else(|err| panic!("{}: {err:#}", scenario.key));
        }
    }
}
