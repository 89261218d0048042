// Integration tests (native) for the `sokoban` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use sokoban::{
    App, Board, CAMPAIGN, Direction, FrameInput, GameConfig, LoadError, Mode, MoveOutcome,
    Position, StaticLevels, TileKind, load_level,
};

use Direction::{East as E, North as N, South as S, West as W};

const VIEW: (i32, i32) = (800, 800);

fn frame(app: &mut App, input: FrameInput) {
    app.frame(&input, VIEW, 1.0 / 60.0);
}

fn idle(app: &mut App) {
    frame(app, FrameInput::default());
}

fn play_clicked(app: &mut App) {
    idle(app);
    let play = app.buttons()[0].bounds;
    frame(
        app,
        FrameInput {
            pointer: (play.x + play.w / 2, play.y + play.h / 2),
            clicked: true,
            ..FrameInput::default()
        },
    );
    // Loading lasts 0.2s; 60Hz frames get there in 13 frames.
    while matches!(app.mode(), Mode::Loading(_)) {
        idle(app);
    }
    idle(app);
}

#[test]
fn reference_level_loads_as_described() {
    let board = Board::parse("g@.\nw.o\n...\n");
    let goals: Vec<_> = board
        .tiles()
        .filter(|t| t.kind == TileKind::Goal)
        .map(|t| t.position)
        .collect();
    assert_eq!(goals, vec![Position::new(0, 0)]);
    assert!(!board.tile(Position::new(0, 0)).unwrap().has_box);
    assert_eq!(board.player(), Some(Position::new(0, 1)));
    assert_eq!(board.tile(Position::new(1, 0)).unwrap().kind, TileKind::Wall);
    assert!(board.tile(Position::new(1, 2)).unwrap().has_box);
    assert!(!board.is_solved());
}

#[test]
fn pushing_box_onto_goal_solves_board() {
    let mut board = Board::parse("wwwwww\nwg.o@w\nwwwwww\n");
    assert_eq!(board.apply_move(W), MoveOutcome::Pushed);
    assert!(!board.is_solved());
    assert_eq!(board.apply_move(W), MoveOutcome::Pushed);
    assert!(board.is_solved());
    // The box is now against the wall.
    assert_eq!(board.apply_move(W), MoveOutcome::Blocked);
}

#[test]
fn missing_level_is_a_recoverable_signal() {
    let err = load_level(&CAMPAIGN, 9999, 100).unwrap_err();
    assert_eq!(err, LoadError::NotFound(9999));
    assert!(!err.is_fatal());
}

#[test]
fn whole_campaign_can_be_played_through() {
    let solutions: [&[Direction]; 5] = [
        &[E, E],
        &[N, W, S, W, N, E, E, E, S, E, N],
        &[W, N, N, E, E, S, S, W, W, N, E, N, E, S],
        &[
            E, N, N, W, W, S, N, E, E, S, S, W, W, W, E, N, N, W, W, S, S, N, N, E, E, E, S, E,
            S, W, W, W,
        ],
        &[W, N, N, E, E, S, E, S, W, W, W],
    ];

    let mut app = App::with_campaign(GameConfig::default());
    play_clicked(&mut app);
    for (idx, moves) in solutions.iter().enumerate() {
        let level = idx as u32 + 1;
        assert_eq!(app.level(), level);
        assert!(matches!(app.mode(), Mode::Game(_)), "level {level}");
        frame(
            &mut app,
            FrameInput {
                moves: moves.to_vec(),
                ..FrameInput::default()
            },
        );
        assert_eq!(app.level(), level + 1, "level {level} not solved");
        idle(&mut app);
    }

    // No level 6: back to the title with fresh buttons.
    assert_eq!(app.mode(), &Mode::Title);
    idle(&mut app);
    assert_eq!(app.buttons().len(), 2);
    assert!(!app.should_quit());
}

#[test]
fn replaying_from_title_restarts_at_level_one() {
    let mut app = App::new(
        GameConfig::default(),
        Box::new(StaticLevels(&["@og\n"])),
    );
    play_clicked(&mut app);
    frame(
        &mut app,
        FrameInput {
            moves: vec![E],
            ..FrameInput::default()
        },
    );
    idle(&mut app);
    assert_eq!(app.mode(), &Mode::Title);
    assert_eq!(app.level(), 2);

    play_clicked(&mut app);
    assert_eq!(app.level(), 1);
    assert!(matches!(app.mode(), Mode::Game(_)));
}
