//! Tests for the game controller lifecycle.

use obstacle_tictactoe::{
    Board, CellValue, Coord, EventLog, GameController, GameEvent, GameState, IllegalReason,
    MoveError, Symbol,
};

/// Standard board, ends in a draw on the 23rd move.
///
/// ```text
/// O O X X X
/// O # X O X
/// O X O X O
/// X X O # X
/// X O O X O
/// ```
const DRAW_GAME: [(usize, usize); 23] = [
    (0, 2),
    (0, 0),
    (0, 3),
    (0, 1),
    (0, 4),
    (1, 0),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 0),
    (3, 2),
    (3, 1),
    (4, 1),
    (3, 4),
    (4, 2),
    (4, 0),
    (4, 4),
    (4, 3),
];

/// Standard board, X completes the top row with the last empty cell.
const WIN_ON_LAST_CELL: [(usize, usize); 23] = [
    (0, 0),
    (1, 2),
    (0, 1),
    (1, 3),
    (0, 2),
    (2, 0),
    (0, 3),
    (2, 1),
    (1, 0),
    (2, 3),
    (1, 4),
    (2, 4),
    (2, 2),
    (3, 0),
    (3, 4),
    (3, 1),
    (4, 0),
    (3, 2),
    (4, 1),
    (4, 3),
    (4, 2),
    (4, 4),
    (0, 4),
];

fn play_all(controller: &mut GameController, moves: &[(usize, usize)]) -> GameState {
    let mut state = controller.state();
    for &(row, col) in moves {
        state = controller.play(row, col).expect("Valid move");
    }
    state
}

fn open_controller() -> GameController {
    GameController::new(Board::new(5, 5, []).expect("Valid layout"))
}

#[test]
fn test_top_row_win_without_obstacles() {
    let mut controller = open_controller();
    let log = EventLog::shared();
    controller.register(&log);

    // X: (0,0)..(0,3), O on row 4
    let moves = [
        (0, 0),
        (4, 0),
        (0, 1),
        (4, 1),
        (0, 2),
        (4, 2),
        (0, 3),
        (4, 3),
    ];
    let state = play_all(&mut controller, &moves);
    assert_eq!(state, GameState::InProgress);

    assert_eq!(controller.play(0, 4), Ok(GameState::XWon));
    assert_eq!(controller.state(), GameState::XWon);

    let events = log.borrow();
    assert_eq!(
        events.events().last(),
        Some(&GameEvent::StateChanged {
            state: GameState::XWon,
            next_turn: None,
        })
    );
}

#[test]
fn test_broken_diagonal_does_not_win() {
    let board = Board::new(5, 5, [Coord::new(2, 2)]).expect("Valid layout");
    let mut controller = GameController::new(board);

    // X fills the rest of the main diagonal, O answers on row 0
    let moves = [(0, 0), (0, 1), (1, 1), (0, 2), (3, 3), (0, 3), (4, 4)];
    let state = play_all(&mut controller, &moves);
    assert_eq!(state, GameState::InProgress);
    assert_eq!(controller.current_turn(), Symbol::O);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut controller = GameController::default();
    let log = EventLog::shared();
    controller.register(&log);

    for &(row, col) in &DRAW_GAME[..22] {
        assert_eq!(controller.play(row, col), Ok(GameState::InProgress));
    }
    let (row, col) = DRAW_GAME[22];
    assert_eq!(controller.play(row, col), Ok(GameState::Draw));
    assert!(controller.board().is_full());
    assert_eq!(controller.next_turn(), None);

    // One board change plus one state change per move
    assert_eq!(log.borrow().events().len(), 46);
}

#[test]
fn test_win_beats_draw_on_last_cell() {
    let mut controller = GameController::default();
    let state = play_all(&mut controller, &WIN_ON_LAST_CELL);
    assert!(controller.board().is_full());
    assert_eq!(state, GameState::XWon);
}

#[test]
fn test_out_of_range_rejected() {
    let mut controller = GameController::default();
    for (row, col) in [(5, 0), (0, 5), (usize::MAX, 2), (9, 9)] {
        let err = controller.play(row, col).unwrap_err();
        assert!(err.is_out_of_range(), "({row}, {col}) should be out of range");
        assert!(controller.board().get(row, col).unwrap_err().is_out_of_range());
    }
    assert!(controller.history().is_empty());
}

#[test]
fn test_obstacle_rejected_in_every_state() {
    let mut controller = GameController::default();
    let expected = MoveError::IllegalMove {
        coord: Coord::new(3, 3),
        reason: IllegalReason::Obstacle,
    };

    assert_eq!(controller.play(3, 3), Err(expected));

    play_all(&mut controller, &DRAW_GAME);
    assert_eq!(controller.state(), GameState::Draw);
    assert_eq!(controller.play(3, 3), Err(expected));
    assert_eq!(
        controller.play(1, 1).unwrap_err().to_string(),
        "Illegal move at (1, 1): cell is an obstacle"
    );
}

#[test]
fn test_terminal_state_ignores_moves() {
    let mut controller = open_controller();
    let moves = [
        (0, 0),
        (4, 0),
        (0, 1),
        (4, 1),
        (0, 2),
        (4, 2),
        (0, 3),
        (4, 3),
        (0, 4),
    ];
    play_all(&mut controller, &moves);
    assert_eq!(controller.state(), GameState::XWon);

    let log = EventLog::shared();
    controller.register(&log);
    let board_before = controller.board().clone();

    assert_eq!(controller.play(2, 2), Ok(GameState::XWon));
    assert_eq!(controller.play(2, 2), Ok(GameState::XWon));
    // Occupied cells are ignored too once the round is over
    assert_eq!(controller.play(0, 0), Ok(GameState::XWon));

    assert_eq!(controller.board(), &board_before);
    assert!(log.borrow().events().is_empty());
}

#[test]
fn test_reset_restores_round() {
    let mut controller = GameController::default();
    let obstacles_before = controller.board().obstacles().clone();
    play_all(&mut controller, &WIN_ON_LAST_CELL);

    let log = EventLog::shared();
    controller.register(&log);
    controller.reset();

    assert_eq!(controller.state(), GameState::InProgress);
    assert_eq!(controller.current_turn(), Symbol::X);
    assert!(controller.history().is_empty());
    assert_eq!(controller.board(), &Board::standard());
    assert_eq!(controller.board().obstacles(), &obstacles_before);
    for coord in controller.board().playable_cells() {
        assert_eq!(controller.board().get(coord.row, coord.col), Ok(CellValue::Empty));
    }
    assert_eq!(
        log.borrow().events(),
        &[GameEvent::StateChanged {
            state: GameState::InProgress,
            next_turn: Some(Symbol::X),
        }]
    );

    // The next round plays normally
    assert_eq!(controller.play(0, 0), Ok(GameState::InProgress));
    assert_eq!(controller.current_turn(), Symbol::O);
}

#[test]
fn test_o_can_win() {
    let mut controller = open_controller();
    // O takes column 2 while X scatters
    let moves = [
        (0, 0),
        (0, 2),
        (1, 0),
        (1, 2),
        (3, 0),
        (2, 2),
        (4, 1),
        (3, 2),
        (0, 4),
        (4, 2),
    ];
    let state = play_all(&mut controller, &moves);
    assert_eq!(state, GameState::OWon);
    assert_eq!(state.winner(), Some(Symbol::O));
}
