use futures::executor::block_on;
use valentine_web::game::{
    DayCatalog, DayId, GameInput, GameKind, MiniGame, RevealContent, RevealLayout, StoryScript,
    TuningConfig,
};
use valentine_web::pages::{
    reveal::{RevealPage, RevealPageProps},
    stage::{StagePage, StagePageProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn catalog() -> DayCatalog {
    DayCatalog::load_embedded().expect("bundled catalog")
}

fn stage_props(day: DayId, game: MiniGame, celebrating: bool) -> StagePageProps {
    StagePageProps {
        day,
        title: AttrValue::from("Test Day"),
        date: AttrValue::from("Feb 7"),
        game,
        revision: 0,
        celebrating,
        interval: None,
        on_input: Callback::noop(),
        on_tick: Callback::noop(),
        on_exit: Callback::noop(),
    }
}

fn render_stage(props: StagePageProps) -> String {
    block_on(LocalServerRenderer::<StagePage>::with_props(props).render())
}

fn render_reveal(content: RevealContent) -> String {
    block_on(
        LocalServerRenderer::<RevealPage>::with_props(RevealPageProps {
            content,
            on_back: Callback::noop(),
        })
        .render(),
    )
}

#[test]
fn stage_mounts_the_view_for_each_engine() {
    let tuning = TuningConfig::default();
    for day in catalog().days() {
        let marker = match day.game {
            GameKind::CatchItems => "catch-game",
            GameKind::ProximityDrag => "drag-game",
            GameKind::MemoryMatch => "memory-game",
            GameKind::SpotDifference => "spot-game",
            GameKind::TypedPhrase => "phrase-game",
            GameKind::MeterBalance => "meter-game",
            GameKind::ReactionTargets => "reaction-game",
            GameKind::SingleClick => "surprise-game",
        };
        let game = MiniGame::new(day.game, &tuning, 11);
        let html = render_stage(stage_props(day.id, game, false));
        assert!(html.contains(marker), "day {} should render {marker}: {html}", day.id);
        assert!(html.contains("Test Day"));
        assert!(!html.contains("celebrating"));
    }
}

#[test]
fn catch_view_shows_score_out_of_target() {
    let game = MiniGame::new(GameKind::CatchItems, &TuningConfig::default(), 3);
    let html = render_stage(stage_props(DayId(1), game, false));
    assert!(html.contains("Pakadle: 0/10"), "{html}");
    assert!(html.contains("Katyanpasun sawdhan! (X)"));
}

#[test]
fn memory_view_renders_whole_deck_face_down() {
    let game = MiniGame::new(GameKind::MemoryMatch, &TuningConfig::default(), 3);
    let html = render_stage(stage_props(DayId(3), game, false));
    assert_eq!(html.matches("memory-card").count(), 12);
    assert!(!html.contains("🍪"));
}

#[test]
fn spot_view_marks_exactly_one_target() {
    let game = MiniGame::new(GameKind::SpotDifference, &TuningConfig::default(), 9);
    let html = render_stage(stage_props(DayId(4), game, false));
    assert_eq!(html.matches("spot-cell").count(), 25);
    assert_eq!(html.matches("bg-red-600").count(), 1);
    assert!(html.contains("25s"));
}

#[test]
fn phrase_view_reflects_typed_input() {
    let mut game = MiniGame::new(GameKind::TypedPhrase, &TuningConfig::default(), 0);
    assert!(game.handle(&GameInput::Type("i promise".into())));
    let html = render_stage(stage_props(DayId(5), game, false));
    // "I PROMISE" is nine characters, each echoed in the highlighted target.
    assert_eq!(html.matches("class=\"text-[#8B3A3A]\"").count(), 9, "{html}");
    assert!(html.contains("I PROMISE TO STAY"));
}

#[test]
fn meter_view_starts_cold() {
    let game = MiniGame::new(GameKind::MeterBalance, &TuningConfig::default(), 0);
    let html = render_stage(stage_props(DayId(6), game, false));
    assert!(html.contains("Thandi vajtey... Mithi mar na!"));
    assert!(html.contains("Pragati"));
}

#[test]
fn won_drag_shows_the_answer_while_celebrating() {
    let mut game = MiniGame::new(GameKind::ProximityDrag, &TuningConfig::default(), 0);
    game.handle(&GameInput::Release(Some(valentine_web::game::DropGeometry {
        object_center: valentine_web::game::Point::new(0.0, 0.0),
        goal_center: valentine_web::game::Point::new(3.0, 4.0),
    })));
    assert!(game.is_won());
    let html = render_stage(stage_props(DayId(2), game, true));
    assert!(html.contains("Mi nehmich tujha asel."));
    assert!(html.contains("celebrating"));
}

/// The final letter shows its own heading instead of the day's reveal title.
const fn content_has_title(id: u8) -> bool {
    id != 8
}

#[test]
fn reveal_picks_layout_per_day() {
    let catalog = catalog();
    let story = StoryScript::load_from_static();
    let expected = [
        (1, "rose-reveal"),
        (2, "propose-reveal"),
        (3, "chocolate-reveal"),
        (4, "scrapbook-reveal"),
        (7, "scrapbook-reveal"),
        (8, "letter-reveal"),
    ];
    for (id, marker) in expected {
        let day = catalog.get(DayId(id)).expect("day exists");
        let html = render_reveal(RevealContent::for_day(day, &story));
        assert!(html.contains(marker), "day {id} should use {marker}");
        assert!(html.contains("Alabm Band Kara"));
        if content_has_title(id) {
            assert!(html.contains(day.reveal_title.as_str()));
        }
    }
}

#[test]
fn final_letter_renders_every_line_and_signature() {
    let catalog = catalog();
    let story = StoryScript::load_from_static();
    let day = catalog.get(DayId(8)).expect("final day");
    let content = RevealContent::for_day(day, &story);
    assert_eq!(content.layout, RevealLayout::FinalLetter);
    let html = render_reveal(content);
    let written = story.letter.iter().filter(|l| !l.is_empty()).count();
    assert_eq!(html.matches("letter-line").count(), written);
    assert!(html.contains(story.letter_heading.as_str()));
    assert!(html.contains(story.signature.as_str()));
}

#[test]
fn scrapbook_uses_the_note_as_caption() {
    let catalog = catalog();
    let story = StoryScript::load_from_static();
    let day = catalog.get(DayId(5)).expect("day five");
    let html = render_reveal(RevealContent::for_day(day, &story));
    assert!(html.contains(day.note.as_str()));
}
