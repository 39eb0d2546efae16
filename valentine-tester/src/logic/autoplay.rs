//! Scripted policies that win every engine through the session API.
use anyhow::{Result, bail};
use valentine_game::{DropGeometry, GameInput, ItemKind, MiniGame, Point, Showcase, View};

/// Upper bound on policy steps for one day before a run counts as stuck.
pub const STEP_LIMIT: u32 = 50_000;

/// Fresh session with the intro already dismissed.
pub fn session_at_menu(seed: u64) -> Result<Showcase> {
    let mut show = Showcase::from_static(seed)?;
    show.complete_intro();
    Ok(show)
}

/// Drive the mounted engine until the session leaves the game view.
/// Returns the number of policy steps taken.
pub fn play_to_win(show: &mut Showcase) -> Result<u32> {
    let mut steps = 0;
    while show.nav().view() == View::Game {
        if steps >= STEP_LIMIT {
            bail!(
                "day {:?} still unsolved after {STEP_LIMIT} steps",
                show.nav().active_day()
            );
        }
        steps += 1;
        if show.is_celebrating() {
            show.advance(100);
            continue;
        }
        let Some(game) = show.game().cloned() else {
            bail!("game view with nothing mounted");
        };
        step(show, &game);
    }
    Ok(steps)
}

fn step(show: &mut Showcase, game: &MiniGame) {
    match game {
        MiniGame::Catch(g) => {
            let lowest_rose = g
                .items()
                .iter()
                .filter(|i| i.kind == ItemKind::Rose && i.y < 95.0)
                .max_by(|a, b| a.y.total_cmp(&b.y))
                .map(|i| i.x);
            if let Some(x) = lowest_rose {
                show.input(&GameInput::MoveCatcher { x });
            }
            show.advance(400);
        }
        MiniGame::Drag(_) => {
            show.input(&GameInput::DragTo(Point::new(0.0, 120.0)));
            show.input(&GameInput::Release(Some(DropGeometry {
                object_center: Point::new(40.0, 40.0),
                goal_center: Point::new(40.0, 45.0),
            })));
        }
        MiniGame::Memory(g) => {
            if g.is_checking() {
                show.advance(100);
                return;
            }
            let pair = (0..g.len()).filter(|&i| !g.is_matched(i)).find_map(|i| {
                ((i + 1)..g.len())
                    .find(|&j| g.symbol(i) == g.symbol(j))
                    .map(|j| (i, j))
            });
            if let Some((a, b)) = pair {
                show.input(&GameInput::RevealCard(a));
                show.input(&GameInput::RevealCard(b));
            }
        }
        MiniGame::Spot(g) => {
            if let Some(cell) = (0..g.cell_count()).find(|&i| g.is_target(i)) {
                show.input(&GameInput::PickCell(cell));
            }
        }
        MiniGame::Phrase(g) => {
            show.input(&GameInput::Type(g.target().to_lowercase()));
        }
        MiniGame::Meter(g) => {
            if g.warmth() < 75.0 {
                show.input(&GameInput::Hug);
            }
            show.advance(30);
        }
        MiniGame::Reaction(g) => {
            for target in g.targets() {
                show.input(&GameInput::Hit(target.id));
            }
            show.advance(100);
        }
        MiniGame::SingleClick(_) => {
            show.input(&GameInput::Activate);
        }
    }
}
