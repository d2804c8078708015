//! Integration tests for the full session loop

use quadris::core::display::{Frontend, Hud, NullHud, NullSurface, Surface};
use quadris::core::rng::SequenceSource;
use quadris::core::{Game, Phase};
use quadris::term::{GridCanvas, StatusHud};
use quadris::types::{Action, Color, Shape};

fn frontend<'a>(
    board: &'a mut dyn Surface,
    preview: &'a mut dyn Surface,
    hud: &'a mut dyn Hud,
) -> Frontend<'a> {
    Frontend {
        board,
        preview,
        hud,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut board = NullSurface::board();
    let mut preview = NullSurface::preview();
    let mut hud = NullHud;

    let mut game = Game::new(12345);
    assert_eq!(game.phase(), Phase::Idle);

    game.start(&mut frontend(&mut board, &mut preview, &mut hud));
    assert_eq!(game.phase(), Phase::Running);
    assert!(game.current().is_some());
    assert!(game.next().is_some());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_same_seed_same_session() {
    let mut board = NullSurface::board();
    let mut preview = NullSurface::preview();
    let mut hud = NullHud;

    let mut a = Game::new(42);
    let mut b = Game::new(42);
    a.start(&mut frontend(&mut board, &mut preview, &mut hud));
    b.start(&mut frontend(&mut board, &mut preview, &mut hud));

    for step in 0..200 {
        if step % 5 == 0 {
            a.handle_input(Action::MoveLeft, &mut frontend(&mut board, &mut preview, &mut hud));
            b.handle_input(Action::MoveLeft, &mut frontend(&mut board, &mut preview, &mut hud));
        }
        a.tick(&mut frontend(&mut board, &mut preview, &mut hud));
        b.tick(&mut frontend(&mut board, &mut preview, &mut hud));

        assert_eq!(a.current(), b.current());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.phase(), b.phase());
    }
}

#[test]
fn test_line_clear_reaches_the_hud_and_canvas() {
    let mut board = GridCanvas::board();
    let mut preview = GridCanvas::preview();
    let mut hud = StatusHud::new();

    let mut game = Game::with_source(SequenceSource::new(&[Shape::O]));
    game.start(&mut frontend(&mut board, &mut preview, &mut hud));

    // Leave only the two rightmost columns of the bottom row open.
    for col in 0..10 {
        game.grid_mut().settle(25, col, Color::Blue);
    }
    for _ in 0..5 {
        game.handle_input(Action::MoveRight, &mut frontend(&mut board, &mut preview, &mut hud));
    }
    for _ in 0..23 {
        game.handle_input(Action::SoftDrop, &mut frontend(&mut board, &mut preview, &mut hud));
    }

    // Lock tick, then the tick that clears the completed row.
    game.tick(&mut frontend(&mut board, &mut preview, &mut hud));
    game.tick(&mut frontend(&mut board, &mut preview, &mut hud));

    assert_eq!(game.score(), 100);
    assert_eq!(hud.score(), 100);
    assert_eq!(hud.level(), 1);

    // The next render shows the compacted grid: the O's top half sits on
    // the canvas bottom row, the cleared prefill is gone.
    game.tick(&mut frontend(&mut board, &mut preview, &mut hud));
    assert_eq!(board.get(21, 10), Some(Color::Yellow));
    assert_eq!(board.get(21, 11), Some(Color::Yellow));
    assert_eq!(board.get(21, 0), None);
}

#[test]
fn test_fresh_board_walkthrough() {
    let mut board = NullSurface::board();
    let mut preview = NullSurface::preview();
    let mut hud = StatusHud::new();

    let mut game = Game::with_source(SequenceSource::new(&[Shape::T]));
    game.start(&mut frontend(&mut board, &mut preview, &mut hud));

    // Empty board: the spawn placement is free.
    use quadris::types::Rotation;
    assert!(!game.collision(4, 0, Rotation::North));
    // The T's left arm sits at local x=0, so x=-1 puts it off the board.
    assert!(game.collision(-1, 0, Rotation::North));

    // A hand-filled row clears for exactly 100 points.
    for col in 0..12 {
        game.grid_mut().settle(20, col, Color::Red);
    }
    game.grid_mut().settle(19, 2, Color::Green);
    assert_eq!(game.clear_filled_lines(&mut hud), 1);
    assert_eq!(game.score(), 100);
    assert_eq!(hud.score(), 100);
    assert!(!game.grid().filled(19, 2));
    assert!(game.grid().filled(20, 2));
}

#[test]
fn test_preview_canvas_shows_the_next_shape() {
    let mut board = GridCanvas::board();
    let mut preview = GridCanvas::preview();
    let mut hud = StatusHud::new();

    let mut game = Game::with_source(SequenceSource::new(&[Shape::I, Shape::O]));
    game.start(&mut frontend(&mut board, &mut preview, &mut hud));

    // Next is the O: a 2x2 block in the middle of the 4x4 preview.
    assert_eq!(preview.get(1, 1), Some(Color::Yellow));
    assert_eq!(preview.get(2, 2), Some(Color::Yellow));
    assert_eq!(preview.get(0, 0), None);
    assert!(preview.take_presented());
}

#[test]
fn test_stacking_to_the_top_ends_the_session() {
    let mut board = GridCanvas::board();
    let mut preview = GridCanvas::preview();
    let mut hud = StatusHud::new();

    let mut game = Game::with_source(SequenceSource::new(&[Shape::O]));
    game.start(&mut frontend(&mut board, &mut preview, &mut hud));

    // Every piece is an O in the spawn column; the stack must reach the
    // hidden rows well within this bound.
    for _ in 0..2000 {
        if !game.is_running() {
            break;
        }
        game.tick(&mut frontend(&mut board, &mut preview, &mut hud));
    }

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(hud.game_over());

    // Restart clears the game-over flag and the stack.
    game.start(&mut frontend(&mut board, &mut preview, &mut hud));
    assert!(!hud.game_over());
    assert_eq!(game.score(), 0);
    assert!(game.grid().cells().iter().all(|c| c.is_none()));
}
