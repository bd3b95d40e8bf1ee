//! Turn sequencing, move legality and round evaluation.

use crate::action::Move;
use crate::board::Board;
use crate::error::{IllegalReason, MoveError};
use crate::observer::{GameObserver, ObserverList};
use crate::rules;
use crate::types::{CellValue, Coord, GameState, Symbol};
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Winning line length of the standard game.
pub const DEFAULT_WIN_LENGTH: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Drives one board through successive rounds.
///
/// The controller owns its [`Board`] and pushes every change to the
/// registered [`GameObserver`]s. A round runs from
/// [`GameState::InProgress`] to a terminal state; after that, moves are
/// ignored until [`GameController::reset`].
#[derive(Debug)]
pub struct GameController {
    pub(crate) board: Board,
    pub(crate) current_turn: Symbol,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
    win_length: NonZeroUsize,
    observers: ObserverList,
}

impl GameController {
    /// Creates a controller using the standard win length.
    pub fn new(board: Board) -> Self {
        Self::with_win_length(board, DEFAULT_WIN_LENGTH)
    }

    /// Creates a controller that needs `win_length` marks in a row to win.
    #[instrument(skip(board), fields(rows = board.rows(), cols = board.cols()))]
    pub fn with_win_length(board: Board, win_length: NonZeroUsize) -> Self {
        info!("Creating game controller");
        Self {
            board,
            current_turn: Symbol::X,
            state: GameState::InProgress,
            history: Vec::new(),
            win_length,
            observers: ObserverList::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After a win this is still the winner; use [`GameController::next_turn`]
    /// when the distinction matters.
    pub fn current_turn(&self) -> Symbol {
        self.current_turn
    }

    /// Returns the player to move, or `None` once the round is over.
    pub fn next_turn(&self) -> Option<Symbol> {
        (!self.state.is_terminal()).then_some(self.current_turn)
    }

    /// Returns the round state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves accepted in the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Marks in a row needed to win.
    pub fn win_length(&self) -> NonZeroUsize {
        self.win_length
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer. Past events are not replayed.
    ///
    /// The controller holds a weak handle; dropping the last `Rc` silently
    /// unregisters the observer.
    pub fn register<O: GameObserver + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        self.observers.register(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Returns the state after the move. Once the round is over the call is
    /// a no-op that returns the terminal state without notifying anyone.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if the coordinate is off the board.
    /// - [`MoveError::IllegalMove`] if the cell is an obstacle (in any
    ///   state) or already occupied (while in progress).
    ///
    /// A rejected move changes nothing and notifies nobody.
    #[instrument(skip(self), fields(turn = %self.current_turn, state = ?self.state))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let coord = Coord::new(row, col);
        if self.board.get(row, col)? == CellValue::Obstacle {
            return Err(MoveError::IllegalMove {
                coord,
                reason: IllegalReason::Obstacle,
            });
        }

        if self.state.is_terminal() {
            debug!("Round is over, ignoring move");
            return Ok(self.state);
        }

        let symbol = self.current_turn;
        self.board.set(row, col, symbol)?;
        self.history.push(Move::new(symbol, coord));
        self.observers.notify_board_change(coord, symbol);

        // A completed line beats a full board.
        self.state = if rules::is_winner(&self.board, coord, symbol, self.win_length.get()) {
            GameState::won_by(symbol)
        } else if rules::is_full(&self.board) {
            GameState::Draw
        } else {
            self.current_turn = symbol.opponent();
            GameState::InProgress
        };

        let next_turn = self.next_turn();
        info!(%coord, %symbol, new_state = ?self.state, "Move accepted");
        self.observers.notify_state_change(self.state, next_turn);

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(self.state)
    }

    /// Starts a new round on the same obstacle layout.
    ///
    /// Observers receive a single state change announcing X to move; they
    /// repaint the board themselves.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current_turn = Symbol::X;
        self.state = GameState::InProgress;

        info!("Round reset");
        self.observers
            .notify_state_change(GameState::InProgress, Some(Symbol::X));
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Board::standard())
    }
}
